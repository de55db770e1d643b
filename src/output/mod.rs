//! Report renderers.
//!
//! The default [`text`] renderer prints exactly what a reviewer reads in a
//! terminal or a CI log: one `P0`/`P1`/`P2` line per diagnostic, or
//! `OK: no problems found`. [`json`] carries the same diagnostics plus run
//! metadata and severity counts for scripts, and [`sarif`] turns them into
//! SARIF results so code-scanning dashboards can annotate the offending
//! prompt file or skill directory.
//!
//! The format never changes the exit code; that is derived from the report
//! alone.

pub mod json;
pub mod sarif;
pub mod text;

use crate::finding::ValidationReport;

/// Selected with `--format`.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `<P0|P1|P2> <message>: <path>` line per diagnostic.
    #[default]
    Text,
    /// Pretty-printed JSON document, see [`json::format`].
    Json,
    /// SARIF 2.1.0 log with one run, see [`sarif::format`].
    Sarif,
}

/// Renders `report` as the complete, newline-terminated stdout payload.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use authoring_lint::finding::ValidationReport;
/// use authoring_lint::output::{format_report, OutputFormat};
/// use authoring_lint::validators::DocumentKind;
///
/// colored::control::set_override(false);
/// let report = ValidationReport::new(DocumentKind::Skill, Path::new("skills"), 0, vec![]);
/// assert_eq!(format_report(&report, OutputFormat::Text), "OK: no problems found\n");
/// ```
pub fn format_report(report: &ValidationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => text::format(report),
        OutputFormat::Json => json::format(report),
        OutputFormat::Sarif => sarif::format(report),
    }
}
