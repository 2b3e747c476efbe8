#![forbid(unsafe_code)]

//! Built-in rule sets embedded at compile time
//!
//! Built-in rule files are compiled into the binary with `include_str!`, so
//! the refactors they describe can be replayed without shipping a rule file.

use crate::config::Config;
use crate::error::ConfigError;

/// Rule set used when neither `--rules` nor `rewrites.toml` is available
pub const DEFAULT_BUILTIN: &str = "restore-file-selector";

/// Embedded built-in rule files, keyed by name
const BUILTIN_RULE_SETS: &[(&str, &str)] = &[(
    "restore-file-selector",
    include_str!("../../builtin-rewrites/restore-file-selector.toml"),
)];

/// Names of every embedded rule set
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_RULE_SETS.iter().map(|(name, _)| *name)
}

/// Parse an embedded rule set by name
///
/// # Errors
///
/// Returns `ConfigError::Validation` for an unknown name, or the parse error
/// of the embedded file.
pub fn load_builtin(name: &str) -> Result<Config, ConfigError> {
    let (_, content) = BUILTIN_RULE_SETS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .ok_or_else(|| {
            ConfigError::Validation(format!(
                "Unknown builtin rule set '{}'. Available: {}",
                name,
                builtin_names().collect::<Vec<_>>().join(", ")
            ))
        })?;

    Config::parse(content)
}
