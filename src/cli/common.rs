//! Common helper functions shared across CLI commands
//!
//! This module resolves which rule file a command uses, compiles it into a
//! RuleSet, and maps errors onto exit codes.

use crate::cli::args::ColorChoice;
use crate::config::Config;
use crate::error::{ConfigError, RewriteError, RuleError};
use crate::rules::{DEFAULT_BUILTIN, RuleSet, load_builtin};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_MISMATCH: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Rule file looked up in the working directory when `--rules` is absent
pub const RULES_FILE: &str = "rewrites.toml";

/// Where a rule set came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOrigin {
    File(PathBuf),
    Builtin(&'static str),
}

impl RuleOrigin {
    /// Name given to the compiled RuleSet
    pub fn name(&self) -> String {
        match self {
            RuleOrigin::File(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            RuleOrigin::Builtin(name) => (*name).to_string(),
        }
    }
}

/// A parsed rule file together with its origin
#[derive(Debug, Clone)]
pub struct LoadedRules {
    pub config: Config,
    pub origin: RuleOrigin,
}

/// Resolve and parse the rule file
///
/// Lookup order: the explicit `--rules` path, `rewrites.toml` in the working
/// directory, then the default builtin rule set.
///
/// # Errors
///
/// Returns `ConfigError::Io` if an explicit rule file cannot be read and
/// `ConfigError::Parse`/`ConfigError::Validation` if it is invalid.
pub fn load_rules(rules: Option<&Path>) -> Result<LoadedRules, ConfigError> {
    if let Some(path) = rules {
        return Ok(LoadedRules {
            config: Config::load(path)?,
            origin: RuleOrigin::File(path.to_path_buf()),
        });
    }

    let default_path = Path::new(RULES_FILE);
    if default_path.exists() {
        return Ok(LoadedRules {
            config: Config::load(default_path)?,
            origin: RuleOrigin::File(default_path.to_path_buf()),
        });
    }

    Ok(LoadedRules {
        config: load_builtin(DEFAULT_BUILTIN)?,
        origin: RuleOrigin::Builtin(DEFAULT_BUILTIN),
    })
}

/// Compile every rule of a loaded rule file, in order
///
/// # Errors
///
/// Returns `RuleError` for the first rule that fails to compile.
pub fn build_rule_set(loaded: &LoadedRules) -> Result<RuleSet, RuleError> {
    RuleSet::from_config(loaded.origin.name(), &loaded.config)
}

/// Pick the document to rewrite
///
/// An explicit `--source` wins and is taken relative to the working
/// directory. A `source` in a rule file is taken relative to that file's
/// directory; a builtin's `source` is relative to the working directory.
///
/// # Errors
///
/// Returns `ConfigError::Validation` when neither is set.
pub fn resolve_source(
    source: Option<&Path>,
    loaded: &LoadedRules,
) -> Result<PathBuf, ConfigError> {
    if let Some(source) = source {
        return Ok(source.to_path_buf());
    }

    let configured = loaded.config.rewrites.source.as_deref().ok_or_else(|| {
        ConfigError::Validation(
            "No source file. Pass --source or set `source` under [rewrites].".to_string(),
        )
    })?;

    match &loaded.origin {
        RuleOrigin::File(rule_file) if configured.is_relative() => {
            let base = rule_file.parent().unwrap_or_else(|| Path::new(""));
            Ok(base.join(configured))
        }
        _ => Ok(configured.to_path_buf()),
    }
}

/// Map a color choice onto a termcolor choice for stderr
pub fn stderr_color(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if std::io::stderr().is_terminal() => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}

/// Exit code for a failed run
pub fn exit_code_for(error: &RewriteError) -> i32 {
    match error {
        RewriteError::RuleMismatch { .. } => EXIT_MISMATCH,
        RewriteError::Store(_) => EXIT_ERROR,
        RewriteError::Config(ConfigError::Io(_)) => EXIT_ERROR,
        RewriteError::Config(_) | RewriteError::Rule(_) => EXIT_PARSE_ERROR,
    }
}
