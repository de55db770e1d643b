//! Line-oriented text formatter.

use colored::Colorize;

use crate::finding::{Diagnostic, Severity, ValidationReport};

/// Printed when a run finds nothing.
pub const OK_LINE: &str = "OK: no problems found";

/// Formats a report as newline-terminated lines.
///
/// A clean report is the single line [`OK_LINE`]; otherwise each diagnostic
/// is one line in report order. Only the severity tag is colored, and only
/// when [`colored`] decides the terminal supports it.
pub fn format(report: &ValidationReport) -> String {
    if report.passed() {
        return format!("{}\n", OK_LINE.green());
    }

    let mut out = String::new();
    for diagnostic in &report.diagnostics {
        out.push_str(&format_line(diagnostic));
        out.push('\n');
    }
    out
}

fn format_line(d: &Diagnostic) -> String {
    let tag = match d.severity {
        Severity::Blocker => d.severity.tag().red().bold(),
        Severity::Warning => d.severity.tag().yellow().bold(),
        Severity::Info => d.severity.tag().blue(),
    };
    format!("{tag} {}", d.detail())
}
