//! Minimal frontmatter extractor.
//!
//! Prompt files and `SKILL.md` documents open with a metadata block:
//!
//! ```text
//! ---
//! name: greet
//! description: "Says hi"
//! ---
//! # Body
//! ```
//!
//! Only flat `key: value` lines are understood. This is deliberately not a
//! YAML parser: block or flow sequences, nested mappings, and multi-line
//! scalars are *not* interpreted. A line such as `- item` has no colon and is
//! skipped; an indented `  child: x` becomes the flat key `child`.
//!
//! # Delimiters
//!
//! - The text must start with `---`, otherwise there is no frontmatter.
//! - The block ends at the first `\n---` after the opening delimiter. Without
//!   one the frontmatter is absent, which callers report as
//!   "missing/invalid". An empty block is a *present* but empty mapping.

use std::collections::BTreeMap;

const DELIMITER: &str = "---";
const CLOSING: &str = "\n---";

/// How quoted values are handled.
///
/// Prompt files historically strip one layer of matching quotes while skill
/// files keep values verbatim; the two kinds keep their own behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    /// Remove one surrounding `"…"` or `'…'` pair from each value.
    Strip,
    /// Keep values exactly as written (after trimming whitespace).
    Preserve,
}

/// A flat key/value mapping taken from a leading `---` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: BTreeMap<String, String>,
}

impl Frontmatter {
    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns the value for `key` only when it is present and non-empty.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the mapping back into a delimited block.
    ///
    /// Extracting the result with [`QuoteMode::Preserve`] reproduces this
    /// mapping as long as no key contains a colon and no value spans lines.
    pub fn to_block(&self) -> String {
        let mut out = String::from("---\n");
        for (key, value) in &self.fields {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out.push_str("---\n");
        out
    }
}

impl FromIterator<(String, String)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Frontmatter {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Extracts the frontmatter block from `text`.
///
/// Returns `None` when the text does not start with `---` or the block is
/// never closed by a `\n---` sequence. Individual malformed lines never fail
/// the extraction; lines without a colon are ignored and later duplicate keys
/// overwrite earlier ones.
///
/// # Examples
///
/// ```
/// use authoring_lint::frontmatter::{extract, QuoteMode};
///
/// let fm = extract("---\nname: 'greet'\n---\nbody", QuoteMode::Strip).unwrap();
/// assert_eq!(fm.get("name"), Some("greet"));
///
/// assert!(extract("# no frontmatter", QuoteMode::Strip).is_none());
/// ```
pub fn extract(text: &str, mode: QuoteMode) -> Option<Frontmatter> {
    if !text.starts_with(DELIMITER) {
        return None;
    }
    let end = DELIMITER.len() + text[DELIMITER.len()..].find(CLOSING)?;
    let block = text[DELIMITER.len()..end].trim_matches('\n');

    let mut fields = BTreeMap::new();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        let value = match mode {
            QuoteMode::Strip => strip_quotes(value),
            QuoteMode::Preserve => value,
        };
        fields.insert(key.trim().to_string(), value.to_string());
    }

    Some(Frontmatter { fields })
}

/// Removes exactly one layer of matching single or double quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
