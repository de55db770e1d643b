use std::process::ExitCode;

use authoring_lint::cli;
use authoring_lint::validators::DocumentKind;

fn main() -> ExitCode {
    cli::run(DocumentKind::Skill)
}
