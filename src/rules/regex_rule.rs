#![forbid(unsafe_code)]

//! Regex-based replacement rule
//!
//! This module provides RegexRule, which rewrites every span matched by a
//! regular expression using a capture-aware replacement template. Deleting
//! obsolete code is a RegexRule with an empty replacement.

use crate::config::RuleDefinition;
use crate::error::RuleError;
use crate::rules::{Rewrite, Rule};
use crate::types::{MatchScope, RuleId, RuleKind};
use regex::Regex;

/// A rule that rewrites text matched by a regular expression
///
/// The replacement template follows `regex` substitution syntax: `$1`,
/// `${1}`, `$name`, `${name}`, and `$$` for a literal dollar sign. A reference
/// immediately followed by identifier characters must use the braced form
/// (`${1}abc`), otherwise the whole run is read as a group name.
///
/// The engine has no notion of code structure. A pattern deleting a function
/// body should stop at the first closing brace (`[^}]+\}`) or otherwise bound
/// itself so it cannot run across sibling definitions.
#[derive(Debug, Clone)]
pub struct RegexRule {
    id: RuleId,
    description: String,
    pattern: Regex,
    replacement: String,
    required: bool,
    scope: MatchScope,
}

impl RegexRule {
    /// Compile a required, all-matches regex rule
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if the pattern does not compile, and
    /// `RuleError::InvalidDefinition` if it is empty.
    pub fn new(
        id: RuleId,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, RuleError> {
        if pattern.is_empty() {
            return Err(RuleError::InvalidDefinition(format!(
                "Rule '{}' has an empty regex pattern",
                id
            )));
        }

        let pattern = Regex::new(pattern).map_err(|e| {
            RuleError::InvalidRegex(format!(
                "Rule '{}' failed to compile pattern '{}': {}",
                id, pattern, e
            ))
        })?;

        Ok(RegexRule {
            description: String::new(),
            id,
            pattern,
            replacement: replacement.into(),
            required: true,
            scope: MatchScope::All,
        })
    }

    /// Build a regex rule from a `[[rule]]` definition
    pub fn from_definition(def: &RuleDefinition) -> Result<Self, RuleError> {
        let mut rule = Self::new(def.id.clone(), &def.pattern, &def.replacement)?;
        rule.description = def.description.clone().unwrap_or_default();
        rule.required = def.required;
        rule.scope = def.scope;
        Ok(rule)
    }

    pub fn with_scope(mut self, scope: MatchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

impl Rule for RegexRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Regex
    }

    fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn replacement(&self) -> &str {
        &self.replacement
    }

    fn required(&self) -> bool {
        self.required
    }

    fn scope(&self) -> MatchScope {
        self.scope
    }

    fn apply(&self, content: &str) -> Option<Rewrite> {
        let limit = self.scope.limit().unwrap_or(usize::MAX);
        let mut text = String::with_capacity(content.len());
        let mut last_end = 0;
        let mut matches = 0;

        // Positions come from the untouched input; substitution happens as we go.
        for caps in self.pattern.captures_iter(content).take(limit) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            text.push_str(&content[last_end..whole.start()]);
            caps.expand(&self.replacement, &mut text);
            last_end = whole.end();
            matches += 1;
        }

        if matches == 0 {
            return None;
        }

        text.push_str(&content[last_end..]);
        Some(Rewrite { text, matches })
    }
}
