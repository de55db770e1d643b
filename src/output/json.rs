//! JSON output formatter.

use std::path::Path;

use crate::finding::{Diagnostic, Severity, ValidationReport};
use crate::validators::DocumentKind;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    kind: DocumentKind,
    root: &'a Path,
    timestamp: &'a str,
    documents_checked: usize,
    passed: bool,
    summary: Summary,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(serde::Serialize)]
struct Summary {
    p0: usize,
    p1: usize,
    p2: usize,
}

#[derive(serde::Serialize)]
struct JsonDiagnostic<'a> {
    severity: Severity,
    rule_id: &'a str,
    message: &'a str,
    path: &'a Path,
    observed: Option<&'a str>,
    /// The same line the text format prints.
    line: String,
}

/// Formats a [`ValidationReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &ValidationReport) -> String {
    let (p0, p1, p2) = report.count_by_severity();
    let output = JsonOutput {
        kind: report.kind,
        root: &report.root,
        timestamp: &report.timestamp,
        documents_checked: report.documents_checked,
        passed: report.passed(),
        summary: Summary { p0, p1, p2 },
        diagnostics: report.diagnostics.iter().map(to_json).collect(),
    };

    let mut json = serde_json::to_string_pretty(&output).expect("JSON serialization failed");
    json.push('\n');
    json
}

fn to_json(d: &Diagnostic) -> JsonDiagnostic<'_> {
    JsonDiagnostic {
        severity: d.severity,
        rule_id: &d.rule_id,
        message: &d.message,
        path: &d.path,
        observed: d.observed.as_deref(),
        line: d.to_string(),
    }
}
