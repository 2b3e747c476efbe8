#![forbid(unsafe_code)]

//! Rule listing formatters
//!
//! Used by `rewrites list` to show the resolved rule set in application
//! order, in human-readable or JSONL form.

use crate::rules::RuleSet;
use serde::Serialize;

/// Human-readable formatter for a rule set
pub struct RuleListingHumanFormatter;

impl RuleListingHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        RuleListingHumanFormatter
    }

    /// Format a rule set for human consumption
    pub fn format(&self, rules: &RuleSet) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Rule set '{}' ({} rules, applied in order):\n",
            rules.name(),
            rules.len()
        ));
        output.push('\n');

        for (position, rule) in rules.iter().enumerate() {
            output.push_str(&format!(
                "{:>2}. {} ({})\n",
                position + 1,
                rule.id(),
                rule.kind()
            ));
            if !rule.description().is_empty() {
                output.push_str(&format!("    Description: {}\n", rule.description()));
            }
            output.push_str(&format!("    Pattern: {}\n", preview(rule.pattern())));
            let replacement = if rule.replacement().is_empty() {
                "(delete)".to_string()
            } else {
                preview(rule.replacement())
            };
            output.push_str(&format!("    Replacement: {}\n", replacement));
            output.push_str(&format!(
                "    Required: {}  Scope: {:?}\n",
                if rule.required() { "yes" } else { "no" },
                rule.scope()
            ));
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rules: &RuleSet) {
        print!("{}", self.format(rules));
    }
}

impl Default for RuleListingHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// First line of `text`, marked when more lines follow
fn preview(text: &str) -> String {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    let remaining = lines.count();
    if remaining == 0 {
        first.to_string()
    } else {
        format!("{} … (+{} lines)", first, remaining)
    }
}

/// JSONL output structure for a listed rule
#[derive(Debug, Serialize)]
struct JsonlRule<'a> {
    index: usize,
    rule_id: &'a str,
    kind: &'static str,
    description: &'a str,
    pattern: &'a str,
    replacement: &'a str,
    required: bool,
    scope: crate::types::MatchScope,
}

/// JSONL formatter for a rule set
pub struct RuleListingJsonlFormatter;

impl RuleListingJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        RuleListingJsonlFormatter
    }

    /// Format a rule set as JSONL, one object per rule
    pub fn format(&self, rules: &RuleSet) -> String {
        let mut output = String::new();

        for (position, rule) in rules.iter().enumerate() {
            let record = JsonlRule {
                index: position + 1,
                rule_id: rule.id().as_str(),
                kind: rule.kind().as_str(),
                description: rule.description(),
                pattern: rule.pattern(),
                replacement: rule.replacement(),
                required: rule.required(),
                scope: rule.scope(),
            };

            match serde_json::to_string(&record) {
                Ok(json) => {
                    output.push_str(&json);
                    output.push('\n');
                }
                Err(e) => eprintln!("Warning: Failed to serialize rule '{}': {}", rule.id(), e),
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rules: &RuleSet) {
        print!("{}", self.format(rules));
    }
}

impl Default for RuleListingJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
