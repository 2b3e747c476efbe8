#![forbid(unsafe_code)]

//! Ordered rule sets
//!
//! A RuleSet owns its rules in application order. Every rule is compiled when
//! the set is built, so a malformed pattern is reported before any document
//! is touched.

use crate::config::{Config, RuleDefinition};
use crate::error::RuleError;
use crate::rules::{LiteralRule, RegexRule, Rule};
use crate::types::{RuleId, RuleKind};
use std::fmt;

/// An ordered sequence of compiled rules
pub struct RuleSet {
    name: String,
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Compile every definition, preserving order
    ///
    /// # Errors
    ///
    /// Returns the first `RuleError` encountered: an invalid regex, an empty
    /// pattern, or a duplicate rule ID.
    pub fn from_definitions(
        name: impl Into<String>,
        definitions: &[RuleDefinition],
    ) -> Result<Self, RuleError> {
        let mut set = Self::new(name);
        for def in definitions {
            set.push(build_rule(def)?)?;
        }
        Ok(set)
    }

    /// Compile the rules of a parsed rule file
    pub fn from_config(name: impl Into<String>, config: &Config) -> Result<Self, RuleError> {
        Self::from_definitions(name, &config.rules)
    }

    /// Append a rule at the end of the set
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` if a rule with the same ID is
    /// already present.
    pub fn push(&mut self, rule: Box<dyn Rule>) -> Result<(), RuleError> {
        if self.contains(rule.id()) {
            return Err(RuleError::InvalidDefinition(format!(
                "Duplicate rule ID '{}' in rule set '{}'",
                rule.id(),
                self.name
            )));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Builder-style `push`
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Result<Self, RuleError> {
        self.push(Box::new(rule))?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, id: &RuleId) -> bool {
        self.rules.iter().any(|rule| rule.id() == id)
    }

    /// Iterate over rules in application order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("name", &self.name)
            .field(
                "rules",
                &self.iter().map(|rule| rule.id().as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Compile a single definition into the matching rule type
pub fn build_rule(def: &RuleDefinition) -> Result<Box<dyn Rule>, RuleError> {
    Ok(match def.kind {
        RuleKind::Literal => Box::new(LiteralRule::from_definition(def)?),
        RuleKind::Regex => Box::new(RegexRule::from_definition(def)?),
    })
}
