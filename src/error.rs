//! Error types for rewrites
//!
//! Errors are layered the same way the pipeline is: configuration, rule
//! construction, document storage, and the top-level run error that wraps
//! them all.

use crate::types::RuleId;
use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Rule file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Syntactically valid but semantically wrong configuration
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid rule definition
    #[error("Invalid rule definition: {0}")]
    InvalidDefinition(String),

    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),
}

/// Errors raised while reading or committing a document
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error type for a rewrite run
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Document read/write error
    #[error("{0}")]
    Store(#[from] StoreError),

    /// A required rule matched nothing while running in strict mode
    #[error("Rule #{index} '{rule_id}' is required but matched nothing")]
    RuleMismatch { index: usize, rule_id: RuleId },
}
