//! Document validators.
//!
//! Each artifact kind has a [`Validator`] that knows how to find its
//! documents under a root and how to check one of them:
//!
//! - [`prompt`]: `*.prompt.md` files directly under the root.
//! - [`skill`]: immediate subdirectories, each expected to hold a `SKILL.md`.
//!
//! Both follow the same shape. A structural guard runs first (file present,
//! frontmatter present); if it fails a single `P0` is returned. Otherwise a
//! static table of independent rules is evaluated and every rule that fires
//! contributes one diagnostic.

pub mod prompt;
pub mod skill;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::config::Config;
use crate::finding::{Diagnostic, Severity};

/// The two kinds of authoring artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Prompt,
    Skill,
}

impl DocumentKind {
    /// Plural label used in messages (`"prompts"`, `"skills"`).
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Prompt => "prompts",
            DocumentKind::Skill => "skills",
        }
    }

    /// Name of the binary that validates this kind.
    pub fn command_name(self) -> &'static str {
        match self {
            DocumentKind::Prompt => "validate-prompts",
            DocumentKind::Skill => "validate-skills",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Finds and checks documents of one [`DocumentKind`].
pub trait Validator {
    fn kind(&self) -> DocumentKind;

    /// Lists the validation targets under `root`, sorted by name.
    fn discover(&self, root: &Path, config: &Config) -> Vec<PathBuf>;

    /// Checks one target returned by [`discover`](Validator::discover).
    fn validate(&self, target: &Path, config: &Config) -> Vec<Diagnostic>;
}

/// Returns the validator for `kind`.
pub fn for_kind(kind: DocumentKind) -> Box<dyn Validator> {
    match kind {
        DocumentKind::Prompt => Box::new(prompt::PromptValidator),
        DocumentKind::Skill => Box::new(skill::SkillValidator),
    }
}

static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]{1,64}$").unwrap());

/// `true` when `name` is 1-64 characters of lowercase ASCII letters, digits,
/// or hyphens.
///
/// # Examples
///
/// ```
/// use authoring_lint::validators::is_valid_name;
///
/// assert!(is_valid_name("my-skill-1"));
/// assert!(!is_valid_name("My_Skill"));
/// assert!(!is_valid_name(""));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    RE_NAME.is_match(name)
}

/// Reads a document, replacing invalid UTF-8 with U+FFFD.
pub fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Diagnostic for a document that exists but could not be read.
fn unreadable(rule_id: &str, path: &Path, err: &std::io::Error) -> Diagnostic {
    tracing::warn!(path = %path.display(), error = %err, "failed to read document");
    Diagnostic::new(Severity::Blocker, rule_id, "unreadable file", path)
        .with_observed(err.to_string())
}

/// Entries exactly one level below `root`, sorted by file name.
///
/// Entries that cannot be listed are skipped with a warning.
fn children(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(err) => {
                tracing::warn!(path = ?err.path(), error = %err, "failed to list directory entry");
                None
            }
        })
}

/// Metadata for a single rule.
///
/// Drives `--list-rules` and the rule table of SARIF output.
#[derive(Debug)]
pub struct RuleInfo {
    /// Unique rule identifier (e.g., `"skill/too-long"`).
    pub id: &'static str,
    pub severity: Severity,
    pub kind: DocumentKind,
    /// Short description of what the rule checks.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

/// Rules for one kind.
pub fn rules_for(kind: DocumentKind) -> Vec<RuleInfo> {
    match kind {
        DocumentKind::Prompt => prompt::rules(),
        DocumentKind::Skill => skill::rules(),
    }
}

/// Every rule of every kind.
pub fn all_rules() -> Vec<RuleInfo> {
    let mut rules = prompt::rules();
    rules.extend(skill::rules());
    rules
}
