//! Configuration loading.
//!
//! Every setting has a built-in default, so the configuration file is
//! optional. When present it is a small TOML document:
//!
//! ```toml
//! [prompts]
//! root = "docs/prompts"
//! suffix = ".prompt.md"
//!
//! [skills]
//! root = ".github/skills"
//! file_name = "SKILL.md"
//! max_lines = 500
//! max_description_chars = 1024
//! ```
//!
//! A root passed on the command line always wins over the configured one.

use std::path::{Path, PathBuf};

use crate::error::LintError;
use crate::validators::DocumentKind;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "authoring-lint.toml";

/// Top-level configuration.
///
/// # Examples
///
/// ```
/// use authoring_lint::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.skills.max_lines, 500);
/// assert_eq!(config.prompts.suffix, ".prompt.md");
/// ```
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    pub prompts: PromptsConfig,
    pub skills: SkillsConfig,
}

/// Settings for `*.prompt.md` collections.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Directory scanned when no root argument is given.
    pub root: PathBuf,
    /// File-name suffix that marks a prompt document.
    pub suffix: String,
}

/// Settings for skill collections.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Directory scanned when no root argument is given.
    pub root: PathBuf,
    /// Name of the document every skill directory must contain.
    pub file_name: String,
    /// Longest allowed skill document, in lines.
    pub max_lines: usize,
    /// Longest allowed `description`, in characters.
    pub max_description_chars: usize,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        PromptsConfig {
            root: PathBuf::from(".github/prompts"),
            suffix: ".prompt.md".to_string(),
        }
    }
}

impl Default for SkillsConfig {
    fn default() -> Self {
        SkillsConfig {
            root: PathBuf::from(".github/skills"),
            file_name: "SKILL.md".to_string(),
            max_lines: 500,
            max_description_chars: 1024,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. Otherwise try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`LintError::ConfigNotFound`] for a missing explicit path,
    /// [`LintError::ConfigRead`] when the file cannot be read, and
    /// [`LintError::ConfigParse`] when it is not valid TOML for this schema.
    pub fn load(path: Option<&Path>) -> Result<Config, LintError> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => {
                return Err(LintError::ConfigNotFound {
                    path: p.to_path_buf(),
                })
            }
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        };

        let Some(path) = config_path else {
            tracing::debug!("no config file, using defaults");
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(&path).map_err(|source| LintError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let config: Config =
            toml::from_str(&content).map_err(|source| LintError::ConfigParse {
                path: path.clone(),
                source,
            })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Default root directory for `kind`.
    pub fn root_for(&self, kind: DocumentKind) -> &Path {
        match kind {
            DocumentKind::Prompt => &self.prompts.root,
            DocumentKind::Skill => &self.skills.root,
        }
    }
}
