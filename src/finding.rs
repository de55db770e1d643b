use std::fmt;
use std::path::{Path, PathBuf};

use crate::validators::DocumentKind;

/// How serious a [`Diagnostic`] is.
///
/// Declaration order is the report order: blockers first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Severity {
    /// Structural defect that makes the document unusable (`P0`).
    #[serde(rename = "P0")]
    Blocker,
    /// Likely problem worth fixing (`P1`).
    #[serde(rename = "P1")]
    Warning,
    /// Informational hint (`P2`).
    #[serde(rename = "P2")]
    Info,
}

impl Severity {
    /// The `P0`/`P1`/`P2` tag printed in front of every diagnostic.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Blocker => "P0",
            Severity::Warning => "P1",
            Severity::Info => "P2",
        }
    }

    /// Sort rank; lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Blocker => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One rule violation found in a document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub rule_id: String,
    pub message: String,
    pub path: PathBuf,
    /// Measured value that tripped the rule (e.g. `"612 lines"`).
    pub observed: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, rule_id: &str, message: impl Into<String>, path: &Path) -> Self {
        Diagnostic {
            severity,
            rule_id: rule_id.to_string(),
            message: message.into(),
            path: path.to_path_buf(),
            observed: None,
        }
    }

    pub fn with_observed(mut self, observed: impl Into<String>) -> Self {
        self.observed = Some(observed.into());
        self
    }

    /// Everything after the severity tag: `<message>: <path>` with an
    /// optional ` (<observed>)` suffix.
    pub fn detail(&self) -> String {
        let mut detail = format!("{}: {}", self.message, self.path.display());
        if let Some(ref observed) = self.observed {
            detail.push_str(&format!(" ({observed})"));
        }
        detail
    }
}

/// Renders `<TAG> <detail>`, see [`Diagnostic::detail`].
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity, self.detail())
    }
}

/// Stable-sorts diagnostics by severity rank, keeping discovery order among
/// equal severities.
pub fn sort_by_severity(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by_key(|d| d.severity.rank());
}

/// Everything produced by one run over a root directory.
#[derive(Debug, serde::Serialize)]
pub struct ValidationReport {
    pub kind: DocumentKind,
    pub root: PathBuf,
    pub timestamp: String,
    pub documents_checked: usize,
    /// Sorted by severity; see [`sort_by_severity`].
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new(
        kind: DocumentKind,
        root: &Path,
        documents_checked: usize,
        mut diagnostics: Vec<Diagnostic>,
    ) -> Self {
        sort_by_severity(&mut diagnostics);
        ValidationReport {
            kind,
            root: root.to_path_buf(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            documents_checked,
            diagnostics,
        }
    }

    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// `0` for a clean run, `1` when anything was reported.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    /// Counts `(P0, P1, P2)` diagnostics in a single pass.
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.diagnostics
            .iter()
            .fold((0, 0, 0), |(b, w, i), d| match d.severity {
                Severity::Blocker => (b + 1, w, i),
                Severity::Warning => (b, w + 1, i),
                Severity::Info => (b, w, i + 1),
            })
    }
}
