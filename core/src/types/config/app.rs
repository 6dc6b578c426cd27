use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing configuration, read from glossa.toml.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaConfig {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl GlossaConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("glossa.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.corpus.extension.trim_start_matches('.').is_empty() {
            errors.push("corpus.extension must not be empty".to_string());
        }

        if self.corpus.alias_prefix.is_empty() {
            errors.push("corpus.alias_prefix must not be empty".to_string());
        }

        if self.search.result_limit == 0 {
            errors.push("search.result_limit must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            corpus: CorpusConfig {
                path: self.corpus.path.clone(),
                extension: if self.corpus.extension.trim_start_matches('.').is_empty() {
                    defaults.corpus.extension
                } else {
                    self.corpus.extension.clone()
                },
                alias_prefix: if self.corpus.alias_prefix.is_empty() {
                    defaults.corpus.alias_prefix
                } else {
                    self.corpus.alias_prefix.clone()
                },
            },
            search: SearchConfig {
                result_limit: if self.search.result_limit == 0 {
                    defaults.search.result_limit
                } else {
                    self.search.result_limit
                },
                ..self.search.clone()
            },
        }
    }
}

/// Where the corpus lives and how its units are recognized.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorpusConfig {
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,
    /// File extension of corpus units, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Line prefix that introduces the alias list of a unit.
    #[serde(default = "default_alias_prefix")]
    pub alias_prefix: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
            extension: default_extension(),
            alias_prefix: default_alias_prefix(),
        }
    }
}

/// Case matching behavior for search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    /// Always case sensitive.
    Sensitive,
    /// Always case insensitive.
    #[default]
    Insensitive,
    /// Smart case: case-insensitive unless query contains uppercase.
    Smart,
}

impl fmt::Display for CaseMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMatching::Sensitive => write!(f, "sensitive"),
            CaseMatching::Insensitive => write!(f, "insensitive"),
            CaseMatching::Smart => write!(f, "smart"),
        }
    }
}

/// Search behavior settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub case_matching: CaseMatching,
    #[serde(default = "default_true")]
    pub unicode_normalization: bool,
    /// Maximum number of deduplicated entries emitted per search.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
            result_limit: default_result_limit(),
        }
    }
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("data")
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_alias_prefix() -> String {
    "aliases:".to_string()
}

fn default_result_limit() -> usize {
    50
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
