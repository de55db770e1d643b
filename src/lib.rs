//! # authoring-lint
//!
//! Structural linter for two kinds of Markdown authoring artifacts:
//!
//! - **prompt files** (`*.prompt.md`) directly under a prompts directory;
//! - **skills**, one per subdirectory of a skills directory, each described by
//!   a `SKILL.md`.
//!
//! Both are checked against a small, fixed set of frontmatter and content
//! rules. Every problem becomes a [`Diagnostic`](finding::Diagnostic) tagged
//! `P0` (blocking), `P1` (warning), or `P2` (informational).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use authoring_lint::{config::Config, lint, output, validators::DocumentKind};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = lint::run_lint(DocumentKind::Prompt, Path::new(".github/prompts"), &config)
//!     .expect("prompts root missing");
//!
//! print!("{}", output::format_report(&report, output::OutputFormat::Text));
//! ```
//!
//! ## Architecture
//!
//! 1. **[`frontmatter`]**: flat `key: value` extraction from a leading `---` block.
//! 2. **[`validators`]**: per-kind discovery and rule evaluation.
//! 3. **[`lint`]**: walk a root directory and collect a report.
//! 4. **[`finding`]**: severities, diagnostics, and the severity-sorted report.
//! 5. **[`output`]**: render reports as text, JSON, or [SARIF].
//! 6. **[`cli`]**: the `validate-prompts` and `validate-skills` binaries.
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod cli;
pub mod config;
pub mod error;
pub mod finding;
pub mod frontmatter;
pub mod lint;
pub mod output;
pub mod validators;
