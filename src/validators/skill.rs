//! Skill directory validator.
//!
//! Every immediate subdirectory of the skills root is a skill and must hold a
//! `SKILL.md` (the file name and both length limits come from
//! [`SkillsConfig`](crate::config::SkillsConfig)).
//!
//! # Rules
//!
//! | ID | Sev | What it checks |
//! |----|-----|----------------|
//! | `skill/missing-skill-md` | P0 | `SKILL.md` must exist |
//! | `skill/too-long` | P1 | `SKILL.md` must be ≤ 500 lines |
//! | `skill/missing-frontmatter` | P0 | Leading `---` block must exist and be closed |
//! | `skill/missing-name` | P0 | `name` must be present |
//! | `skill/invalid-name` | P0 | `name` must match `^[a-z0-9-]{1,64}$` |
//! | `skill/directory-mismatch` | P2 | Directory should be named after the skill |
//! | `skill/missing-description` | P0 | `description` must be present and non-empty |
//! | `skill/description-too-long` | P1 | `description` must be ≤ 1024 characters |
//! | `skill/unreadable` | P0 | `SKILL.md` must be readable |
//!
//! Unlike prompt files, frontmatter values are kept verbatim
//! ([`QuoteMode::Preserve`]): `name: "foo"` is the name `"foo"` with quotes,
//! which fails the name pattern.

use std::path::{Path, PathBuf};

use crate::config::{Config, SkillsConfig};
use crate::finding::{Diagnostic, Severity};
use crate::frontmatter::{extract, Frontmatter, QuoteMode};
use crate::validators::{
    children, is_valid_name, read_text, unreadable, DocumentKind, RuleInfo, Validator,
};

/// A skill whose document parsed with frontmatter.
pub struct SkillDocument<'a> {
    /// The skill directory.
    pub dir: &'a Path,
    /// The `SKILL.md` inside it.
    pub file: &'a Path,
    pub frontmatter: Frontmatter,
    pub limits: &'a SkillsConfig,
}

type Rule = fn(&SkillDocument<'_>) -> Option<Diagnostic>;

const RULES: &[Rule] = &[
    check_name,
    check_directory_name,
    check_description,
    check_description_length,
];

/// Checks one skill directory.
///
/// The checks run in this order:
/// 1. The skill document must exist, otherwise a single `P0` is returned.
/// 2. The document's line count is checked.
/// 3. Missing frontmatter adds a `P0` and stops.
/// 4. The remaining rules are evaluated independently.
pub fn validate_skill_dir(dir: &Path, limits: &SkillsConfig) -> Vec<Diagnostic> {
    let file = dir.join(&limits.file_name);
    if !file.exists() {
        return vec![Diagnostic::new(
            Severity::Blocker,
            "skill/missing-skill-md",
            format!("missing {}", limits.file_name),
            dir,
        )];
    }

    let text = match read_text(&file) {
        Ok(text) => text,
        Err(e) => return vec![unreadable("skill/unreadable", &file, &e)],
    };

    let mut diagnostics = Vec::new();
    diagnostics.extend(check_line_count(&file, &text, limits));

    let Some(frontmatter) = extract(&text, QuoteMode::Preserve) else {
        diagnostics.push(Diagnostic::new(
            Severity::Blocker,
            "skill/missing-frontmatter",
            "missing/invalid YAML frontmatter",
            &file,
        ));
        return diagnostics;
    };

    let doc = SkillDocument {
        dir,
        file: &file,
        frontmatter,
        limits,
    };
    diagnostics.extend(RULES.iter().filter_map(|rule| rule(&doc)));
    diagnostics
}

/// Runs before the frontmatter guard, so an over-long file without
/// frontmatter reports both problems. Lines are counted with
/// [`count_lines`].
pub fn check_line_count(file: &Path, text: &str, limits: &SkillsConfig) -> Option<Diagnostic> {
    let lines = count_lines(text);
    (lines > limits.max_lines).then(|| {
        Diagnostic::new(
            Severity::Warning,
            "skill/too-long",
            format!(
                "{} too long (>{} lines)",
                limits.file_name, limits.max_lines
            ),
            file,
        )
        .with_observed(format!("{lines} lines"))
    })
}

/// Counts lines, treating every Unicode line boundary as a break: `\n`,
/// `\r\n`, a bare `\r`, vertical tab, form feed, `\x1c`-`\x1e`, NEL,
/// LINE SEPARATOR and PARAGRAPH SEPARATOR. A trailing break does not start
/// another line.
///
/// # Examples
///
/// ```
/// use authoring_lint::validators::skill::count_lines;
///
/// assert_eq!(count_lines(""), 0);
/// assert_eq!(count_lines("a\nb\n"), 2);
/// assert_eq!(count_lines("a\r\nb\rc"), 3);
/// ```
pub fn count_lines(text: &str) -> usize {
    let mut count = 0;
    let mut open_line = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if is_line_break(c) {
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            count += 1;
            open_line = false;
        } else {
            open_line = true;
        }
    }
    count + usize::from(open_line)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

pub fn check_name(doc: &SkillDocument<'_>) -> Option<Diagnostic> {
    match doc.frontmatter.non_empty("name") {
        None => Some(Diagnostic::new(
            Severity::Blocker,
            "skill/missing-name",
            "missing name in frontmatter",
            doc.file,
        )),
        Some(name) if !is_valid_name(name) => Some(Diagnostic::new(
            Severity::Blocker,
            "skill/invalid-name",
            format!("invalid name '{name}' (must match ^[a-z0-9-]{{1,64}}$)"),
            doc.file,
        )),
        Some(_) => None,
    }
}

/// Directories are conventionally named after their skill. The diagnostic
/// points at the directory, not the document.
pub fn check_directory_name(doc: &SkillDocument<'_>) -> Option<Diagnostic> {
    let name = doc.frontmatter.non_empty("name")?;
    let dir_name = doc
        .dir
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    (dir_name != name).then(|| {
        Diagnostic::new(
            Severity::Info,
            "skill/directory-mismatch",
            format!("directory name '{dir_name}' differs from skill name '{name}'"),
            doc.dir,
        )
    })
}

pub fn check_description(doc: &SkillDocument<'_>) -> Option<Diagnostic> {
    doc.frontmatter.non_empty("description").is_none().then(|| {
        Diagnostic::new(
            Severity::Blocker,
            "skill/missing-description",
            "missing description in frontmatter",
            doc.file,
        )
    })
}

/// Length is measured in characters, not bytes.
pub fn check_description_length(doc: &SkillDocument<'_>) -> Option<Diagnostic> {
    let chars = doc.frontmatter.non_empty("description")?.chars().count();
    (chars > doc.limits.max_description_chars).then(|| {
        Diagnostic::new(
            Severity::Warning,
            "skill/description-too-long",
            format!(
                "description too long (>{} chars)",
                doc.limits.max_description_chars
            ),
            doc.file,
        )
        .with_observed(format!("{chars} chars"))
    })
}

/// Validator for skill collections.
pub struct SkillValidator;

impl Validator for SkillValidator {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Skill
    }

    /// Immediate subdirectories of `root`. Symlinked directories count;
    /// nested directories and plain files are ignored.
    fn discover(&self, root: &Path, _config: &Config) -> Vec<PathBuf> {
        children(root).filter(|p| p.is_dir()).collect()
    }

    fn validate(&self, target: &Path, config: &Config) -> Vec<Diagnostic> {
        tracing::debug!(dir = %target.display(), "validating skill");
        validate_skill_dir(target, &config.skills)
    }
}

/// Returns the [`RuleInfo`] catalogue for skill directories.
pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "skill/missing-skill-md",
            severity: Severity::Blocker,
            kind: DocumentKind::Skill,
            message: "skill directory has no SKILL.md",
            remediation: "Create SKILL.md with 'name' and 'description' frontmatter, or remove the directory",
        },
        RuleInfo {
            id: "skill/too-long",
            severity: Severity::Warning,
            kind: DocumentKind::Skill,
            message: "SKILL.md exceeds 500 lines",
            remediation: "Move reference material into separate files and link to them",
        },
        RuleInfo {
            id: "skill/missing-frontmatter",
            severity: Severity::Blocker,
            kind: DocumentKind::Skill,
            message: "missing/invalid YAML frontmatter",
            remediation: "Start SKILL.md with a '---' line, add 'name:' and 'description:', and close the block with '---'",
        },
        RuleInfo {
            id: "skill/missing-name",
            severity: Severity::Blocker,
            kind: DocumentKind::Skill,
            message: "frontmatter has no 'name'",
            remediation: "Add 'name: <lowercase-kebab-case>' to the frontmatter",
        },
        RuleInfo {
            id: "skill/invalid-name",
            severity: Severity::Blocker,
            kind: DocumentKind::Skill,
            message: "'name' must match ^[a-z0-9-]{1,64}$",
            remediation: "Use 1-64 lowercase letters, digits, or hyphens, unquoted (e.g. 'pdf-forms')",
        },
        RuleInfo {
            id: "skill/directory-mismatch",
            severity: Severity::Info,
            kind: DocumentKind::Skill,
            message: "directory name differs from skill name",
            remediation: "Rename the directory to match the 'name' field",
        },
        RuleInfo {
            id: "skill/missing-description",
            severity: Severity::Blocker,
            kind: DocumentKind::Skill,
            message: "frontmatter has no 'description'",
            remediation: "Add a 'description:' saying what the skill does and when to use it",
        },
        RuleInfo {
            id: "skill/description-too-long",
            severity: Severity::Warning,
            kind: DocumentKind::Skill,
            message: "description exceeds 1024 characters",
            remediation: "Shorten the description to 1024 characters or fewer",
        },
        RuleInfo {
            id: "skill/unreadable",
            severity: Severity::Blocker,
            kind: DocumentKind::Skill,
            message: "SKILL.md could not be read",
            remediation: "Check file permissions",
        },
    ]
}
