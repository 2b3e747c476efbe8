//! Parsing and validation for rewrites.toml rule files

use crate::error::ConfigError;
use crate::types::{MatchScope, RuleId, RuleKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration struct for rewrites.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rule file metadata
    pub rewrites: RewritesMeta,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Ordered rule definitions (`[[rule]]` tables, in file order)
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleDefinition>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.rewrites.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.rewrites.version
            )));
        }

        if self.rules.is_empty() {
            return Err(ConfigError::Validation(
                "No rules defined. Add at least one [[rule]] table.".to_string(),
            ));
        }

        Ok(())
    }
}

/// `[rewrites]` metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewritesMeta {
    /// Configuration version (must be "1")
    pub version: String,

    /// Default document to rewrite when `--source` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Fail the run when a required rule matches nothing
    #[serde(default)]
    pub strict: bool,
}

/// A single `[[rule]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    pub id: RuleId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub kind: RuleKind,

    pub pattern: String,

    /// Empty replacement deletes every match
    #[serde(default)]
    pub replacement: String,

    #[serde(default = "default_required")]
    pub required: bool,

    #[serde(default)]
    pub scope: MatchScope,
}

fn default_required() -> bool {
    true
}

impl RuleDefinition {
    /// Shorthand for an all-matches, required rule
    pub fn new(
        id: RuleId,
        kind: RuleKind,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: None,
            kind,
            pattern: pattern.into(),
            replacement: replacement.into(),
            required: true,
            scope: MatchScope::All,
        }
    }
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
