//! Prompt file validator.
//!
//! Checks every `*.prompt.md` file directly under the prompts root.
//!
//! # Rules
//!
//! | ID | Sev | What it checks |
//! |----|-----|----------------|
//! | `prompt/missing-frontmatter` | P0 | Leading `---` block must exist and be closed |
//! | `prompt/missing-name` | P0 | `name` must be present |
//! | `prompt/invalid-name` | P0 | `name` must match `^[a-z0-9-]{1,64}$` |
//! | `prompt/missing-description` | P0 | `description` must be present and non-empty |
//! | `prompt/no-input-variables` | P1 | At least one `${input:...}` variable |
//! | `prompt/single-input-variable` | P2 | Two or more `${input:...}` variables |
//! | `prompt/no-output-section` | P2 | Body mentions `Output` (or `出力`) |
//! | `prompt/unreadable` | P0 | File must be readable |
//!
//! Values are read with [`QuoteMode::Strip`], so `name: "greet"` is the name
//! `greet`.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::finding::{Diagnostic, Severity};
use crate::frontmatter::{extract, Frontmatter, QuoteMode};
use crate::validators::{
    children, is_valid_name, read_text, unreadable, DocumentKind, RuleInfo, Validator,
};

/// `${input:name}` or `${input:name:placeholder}` variable references.
static RE_INPUT_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{input:[^}]+\}").unwrap());

/// Substrings that count as an explicit output format section.
const OUTPUT_MARKERS: &[&str] = &["Output", "出力"];

/// A prompt file whose frontmatter parsed successfully.
pub struct PromptDocument<'a> {
    pub path: &'a Path,
    pub text: &'a str,
    pub frontmatter: Frontmatter,
}

type Rule = fn(&PromptDocument<'_>) -> Option<Diagnostic>;

const RULES: &[Rule] = &[
    check_name,
    check_description,
    check_input_variables,
    check_output_section,
];

/// Checks a prompt document given its path and full text.
///
/// Missing frontmatter short-circuits with a single `P0`; otherwise every
/// rule is evaluated independently.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use authoring_lint::validators::prompt::validate_prompt;
///
/// let text = "---\nname: greet\ndescription: says hi\n---\n${input:a} ${input:b}\n## Output\n";
/// assert!(validate_prompt(Path::new("greet.prompt.md"), text).is_empty());
/// ```
pub fn validate_prompt(path: &Path, text: &str) -> Vec<Diagnostic> {
    let Some(frontmatter) = extract(text, QuoteMode::Strip) else {
        return vec![Diagnostic::new(
            Severity::Blocker,
            "prompt/missing-frontmatter",
            "missing/invalid YAML frontmatter",
            path,
        )];
    };

    let doc = PromptDocument {
        path,
        text,
        frontmatter,
    };
    RULES.iter().filter_map(|rule| rule(&doc)).collect()
}

pub fn check_name(doc: &PromptDocument<'_>) -> Option<Diagnostic> {
    match doc.frontmatter.non_empty("name") {
        None => Some(Diagnostic::new(
            Severity::Blocker,
            "prompt/missing-name",
            "missing name",
            doc.path,
        )),
        Some(name) if !is_valid_name(name) => Some(Diagnostic::new(
            Severity::Blocker,
            "prompt/invalid-name",
            format!("invalid name '{name}'"),
            doc.path,
        )),
        Some(_) => None,
    }
}

pub fn check_description(doc: &PromptDocument<'_>) -> Option<Diagnostic> {
    doc.frontmatter.non_empty("description").is_none().then(|| {
        Diagnostic::new(
            Severity::Blocker,
            "prompt/missing-description",
            "missing description",
            doc.path,
        )
    })
}

/// Counts `${input:...}` variables across the whole file, body included.
pub fn check_input_variables(doc: &PromptDocument<'_>) -> Option<Diagnostic> {
    match RE_INPUT_VAR.find_iter(doc.text).count() {
        0 => Some(Diagnostic::new(
            Severity::Warning,
            "prompt/no-input-variables",
            "no ${input:...} variables found (hard to reuse)",
            doc.path,
        )),
        1 => Some(Diagnostic::new(
            Severity::Info,
            "prompt/single-input-variable",
            "only 1 ${input:...} variable found (consider 2+)",
            doc.path,
        )),
        _ => None,
    }
}

pub fn check_output_section(doc: &PromptDocument<'_>) -> Option<Diagnostic> {
    let has_output = OUTPUT_MARKERS.iter().any(|m| doc.text.contains(m));
    (!has_output).then(|| {
        Diagnostic::new(
            Severity::Info,
            "prompt/no-output-section",
            "no explicit output format section found",
            doc.path,
        )
    })
}

/// Validator for `*.prompt.md` collections.
pub struct PromptValidator;

impl Validator for PromptValidator {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Prompt
    }

    /// Regular files directly under `root` whose name ends with the
    /// configured suffix. Subdirectories are not searched.
    fn discover(&self, root: &Path, config: &Config) -> Vec<PathBuf> {
        let suffix = config.prompts.suffix.as_str();
        children(root)
            .filter(|p| p.is_file())
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().ends_with(suffix))
                    .unwrap_or(false)
            })
            .collect()
    }

    fn validate(&self, target: &Path, _config: &Config) -> Vec<Diagnostic> {
        tracing::debug!(path = %target.display(), "validating prompt");
        match read_text(target) {
            Ok(text) => validate_prompt(target, &text),
            Err(e) => vec![unreadable("prompt/unreadable", target, &e)],
        }
    }
}

/// Returns the [`RuleInfo`] catalogue for prompt files.
pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "prompt/missing-frontmatter",
            severity: Severity::Blocker,
            kind: DocumentKind::Prompt,
            message: "missing/invalid YAML frontmatter",
            remediation: "Start the file with a '---' line, add 'name:' and 'description:', and close the block with '---'",
        },
        RuleInfo {
            id: "prompt/missing-name",
            severity: Severity::Blocker,
            kind: DocumentKind::Prompt,
            message: "frontmatter has no 'name'",
            remediation: "Add 'name: <lowercase-kebab-case>' to the frontmatter",
        },
        RuleInfo {
            id: "prompt/invalid-name",
            severity: Severity::Blocker,
            kind: DocumentKind::Prompt,
            message: "'name' must match ^[a-z0-9-]{1,64}$",
            remediation: "Use 1-64 lowercase letters, digits, or hyphens (e.g. 'review-pr')",
        },
        RuleInfo {
            id: "prompt/missing-description",
            severity: Severity::Blocker,
            kind: DocumentKind::Prompt,
            message: "frontmatter has no 'description'",
            remediation: "Add a one-line 'description:' to the frontmatter",
        },
        RuleInfo {
            id: "prompt/no-input-variables",
            severity: Severity::Warning,
            kind: DocumentKind::Prompt,
            message: "no ${input:...} variables found (hard to reuse)",
            remediation: "Parameterize the prompt with ${input:name} variables",
        },
        RuleInfo {
            id: "prompt/single-input-variable",
            severity: Severity::Info,
            kind: DocumentKind::Prompt,
            message: "only one ${input:...} variable found",
            remediation: "Consider exposing two or more ${input:...} variables",
        },
        RuleInfo {
            id: "prompt/no-output-section",
            severity: Severity::Info,
            kind: DocumentKind::Prompt,
            message: "no explicit output format section found",
            remediation: "Add an 'Output' section describing the expected response format",
        },
        RuleInfo {
            id: "prompt/unreadable",
            severity: Severity::Blocker,
            kind: DocumentKind::Prompt,
            message: "prompt file could not be read",
            remediation: "Check file permissions",
        },
    ]
}
