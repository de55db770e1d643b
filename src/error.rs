//! Fatal errors.
//!
//! Rule violations are never errors; they are collected as
//! [`Diagnostic`](crate::finding::Diagnostic)s. Only conditions that prevent a
//! run from starting end up here.

use std::path::PathBuf;

use thiserror::Error;

use crate::validators::DocumentKind;

#[derive(Debug, Error)]
pub enum LintError {
    /// The root directory to validate does not exist.
    #[error("{} root not found: {}", .kind.label(), .path.display())]
    RootNotFound { kind: DocumentKind, path: PathBuf },

    /// The root path exists but is a file or some other non-directory.
    #[error("{} root is not a directory: {}", .kind.label(), .path.display())]
    RootNotDirectory { kind: DocumentKind, path: PathBuf },

    #[error("config file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LintError {
    /// `true` for errors about the root path, which are reported as `P0` lines
    /// on stdout rather than as tool errors.
    pub fn is_root_error(&self) -> bool {
        matches!(
            self,
            LintError::RootNotFound { .. } | LintError::RootNotDirectory { .. }
        )
    }
}
