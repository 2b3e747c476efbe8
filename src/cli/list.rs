//! List command implementation
//!
//! Prints the rules of the resolved rule set in the order they are applied.
//! Compiling the set here also surfaces bad patterns without touching any
//! document.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_SUCCESS, build_rule_set, exit_code_for, load_rules};
use crate::error::RewriteError;
use crate::output::{RuleListingHumanFormatter, RuleListingJsonlFormatter};
use crate::rules::RuleSet;
use std::path::Path;

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Rule file could not be read
/// - 3: Invalid rule file or regex pattern
pub fn run_list(rules: Option<&Path>, format: OutputFormat) -> i32 {
    match resolve_rule_set(rules) {
        Ok(rule_set) => {
            match format {
                OutputFormat::Human => RuleListingHumanFormatter::new().write_to_stdout(&rule_set),
                OutputFormat::Jsonl => RuleListingJsonlFormatter::new().write_to_stdout(&rule_set),
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Load and compile the rule set a command would use
pub fn resolve_rule_set(rules: Option<&Path>) -> Result<RuleSet, RewriteError> {
    let loaded = load_rules(rules)?;
    Ok(build_rule_set(&loaded)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::EXIT_PARSE_ERROR;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_rule_set_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("swap.toml");
        fs::write(
            &path,
            r#"
[rewrites]
version = "1"

[[rule]]
id = "first"
kind = "literal"
pattern = "a"

[[rule]]
id = "second"
kind = "regex"
pattern = "b+"
"#,
        )
        .unwrap();

        let rule_set = resolve_rule_set(Some(&path)).unwrap();
        assert_eq!(rule_set.name(), "swap");
        let ids: Vec<&str> = rule_set.iter().map(|rule| rule.id().as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_list_invalid_pattern_exit_code() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(
            &path,
            "[rewrites]\nversion = \"1\"\n\n[[rule]]\nid = \"bad\"\nkind = \"regex\"\npattern = \"[\"\n",
        )
        .unwrap();

        assert_eq!(run_list(Some(&path), OutputFormat::Human), EXIT_PARSE_ERROR);
    }
}
