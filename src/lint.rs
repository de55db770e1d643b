//! Run orchestration.
//!
//! [`run_lint`] is the entry point for validating one root directory: it
//! checks the root, asks the kind's [`Validator`](crate::validators::Validator)
//! for its targets, validates them one after another, and assembles a
//! [`ValidationReport`].

use std::path::Path;

use crate::config::Config;
use crate::error::LintError;
use crate::finding::ValidationReport;
use crate::validators::{self, DocumentKind};

/// Validates every document of `kind` under `root`.
///
/// Targets are processed sequentially in name order, and the report's
/// diagnostics are stable-sorted by severity so repeated runs print
/// identical output.
///
/// # Errors
///
/// Returns [`LintError::RootNotFound`] when `root` does not exist, and
/// [`LintError::RootNotDirectory`] when a skills root is not a directory.
/// A prompts root that is a regular file yields an empty, passing report.
/// Problems in individual documents are never errors; they become
/// diagnostics.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use authoring_lint::{config::Config, lint, validators::DocumentKind};
///
/// let config = Config::default();
/// let report = lint::run_lint(DocumentKind::Skill, Path::new(".github/skills"), &config)?;
/// std::process::exit(report.exit_code().into());
/// # Ok::<(), authoring_lint::error::LintError>(())
/// ```
pub fn run_lint(
    kind: DocumentKind,
    root: &Path,
    config: &Config,
) -> Result<ValidationReport, LintError> {
    if !root.exists() {
        return Err(LintError::RootNotFound {
            kind,
            path: root.to_path_buf(),
        });
    }
    // A prompts root that is a file simply holds no prompt files.
    if kind == DocumentKind::Skill && !root.is_dir() {
        return Err(LintError::RootNotDirectory {
            kind,
            path: root.to_path_buf(),
        });
    }

    let validator = validators::for_kind(kind);
    let targets = validator.discover(root, config);
    tracing::debug!(
        kind = %validator.kind(),
        root = %root.display(),
        count = targets.len(),
        "discovered documents"
    );

    let diagnostics = targets
        .iter()
        .flat_map(|target| validator.validate(target, config))
        .collect();

    Ok(ValidationReport::new(kind, root, targets.len(), diagnostics))
}
