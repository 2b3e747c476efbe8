//! Initialize a rewrites rule file
//!
//! Writes a commented starter `rewrites.toml` into the current directory.

use crate::cli::common::RULES_FILE;
use std::fs;
use std::path::Path;

/// Default content for rewrites.toml
const DEFAULT_REWRITES_TOML: &str = r#"[rewrites]
version = "1"

# File rewritten when --source is not given (relative to this file)
# source = "src/lib.rs"

# Fail instead of warning when a required rule matches nothing
strict = false

[output]
format = "human"
color = "auto"

# Rules run top to bottom; each one sees the output of the rule above it.
#
# kind = "literal"  exact substring, every occurrence replaced
# kind = "regex"    regular expression; replacement may use $1, ${name}, $$
# scope = "first"   replace only the leftmost match (default "all")
# required = false  do not warn when the pattern is absent

[[rule]]
id = "example-rename"
description = "Rename a field"
kind = "literal"
pattern = "oldName"
replacement = "newName"

# [[rule]]
# id = "example-delete-helper"
# kind = "regex"
# pattern = 'func helper\(\) \{[^}]+\}\s*'
# replacement = ""
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What init did with the rule file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Skipped,
    Overwritten,
}

/// Run the init command
///
/// # Arguments
/// * `force` - If true, overwrite an existing rewrites.toml. If false, leave it alone.
pub fn run_init(force: bool) -> Result<InitOutcome, InitError> {
    let path = Path::new(RULES_FILE);
    let exists = path.exists();

    if exists && !force {
        return Ok(InitOutcome::Skipped);
    }

    fs::write(path, DEFAULT_REWRITES_TOML)?;

    Ok(if exists {
        InitOutcome::Overwritten
    } else {
        InitOutcome::Created
    })
}
