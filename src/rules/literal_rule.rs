#![forbid(unsafe_code)]

//! Exact-substring replacement rule

use crate::config::RuleDefinition;
use crate::error::RuleError;
use crate::rules::{Rewrite, Rule};
use crate::types::{MatchScope, RuleId, RuleKind};

/// A rule that replaces verbatim occurrences of a substring
///
/// Matching is case-sensitive and proceeds left to right over
/// non-overlapping occurrences. The replacement is inserted as-is; `$` has no
/// special meaning here.
#[derive(Debug, Clone)]
pub struct LiteralRule {
    id: RuleId,
    description: String,
    pattern: String,
    replacement: String,
    required: bool,
    scope: MatchScope,
}

impl LiteralRule {
    /// Create a required, all-matches literal rule
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` if `pattern` is empty.
    pub fn new(
        id: RuleId,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(RuleError::InvalidDefinition(format!(
                "Rule '{}' has an empty literal pattern",
                id
            )));
        }

        Ok(LiteralRule {
            description: String::new(),
            id,
            pattern,
            replacement: replacement.into(),
            required: true,
            scope: MatchScope::All,
        })
    }

    /// Build a literal rule from a `[[rule]]` definition
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

impl Rule for LiteralRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Literal
    }

    fn pattern(&self) -> &str {
        &self.pattern
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

        for (start, matched) in content.match_indices(self.pattern.as_str()).take(limit) {
            text.push_str(&content[last_end..start]);
            text.push_str(&self.replacement);
            last_end = start + matched.len();
            matches += 1;
        }

        if matches == 0 {
            return None;
        }

        text.push_str(&content[last_end..]);
        Some(Rewrite { text, matches })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str, replacement: &str) -> LiteralRule {
        LiteralRule::new(RuleId::new("test-rule").unwrap(), pattern, replacement).unwrap()
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let rewrite = rule("fileList", "fileSelector")
            .apply("m.fileList.SetSize(w, h)\nm.fileList.View()")
            .unwrap();

        assert_eq!(
            rewrite.text,
            "m.fileSelector.SetSize(w, h)\nm.fileSelector.View()"
        );
        assert_eq!(rewrite.matches, 2);
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(rule("absent", "x").apply("present"), None);
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        let rewrite = rule("a", "aa").apply("a").unwrap();
        assert_eq!(rewrite.text, "aa");
        assert_eq!(rewrite.matches, 1);
    }

    #[test]
    fn test_matches_do_not_overlap() {
        let rewrite = rule("aa", "b").apply("aaa").unwrap();
        assert_eq!(rewrite.text, "ba");
        assert_eq!(rewrite.matches, 1);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(rule("Foo", "Bar").apply("foo FOO"), None);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let rewrite = rule("m.items[0]", "$1").apply("x := m.items[0]").unwrap();
        assert_eq!(rewrite.text, "x := $1");
    }

    #[test]
    fn test_first_scope_replaces_leftmost_only() {
        let rewrite = rule("x", "y")
            .with_scope(MatchScope::First)
            .apply("x x x")
            .unwrap();

        assert_eq!(rewrite.text, "y x x");
        assert_eq!(rewrite.matches, 1);
    }

    #[test]
    fn test_multiline_block_replacement() {
        let before = "\tfl := styles.NewMinimalList()\n\n\tvp := viewport.New(0, 0)\n";
        let rewrite = rule("fl := styles.NewMinimalList()", "fs := NewFileSelector()")
            .apply(before)
            .unwrap();

        assert_eq!(
            rewrite.text,
            "\tfs := NewFileSelector()\n\n\tvp := viewport.New(0, 0)\n"
        );
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let result = LiteralRule::new(RuleId::new("empty").unwrap(), "", "x");
        assert!(matches!(result, Err(RuleError::InvalidDefinition(_))));
    }

    #[test]
    fn test_from_definition_copies_settings() {
        let mut def = RuleDefinition::new(
            RuleId::new("rename").unwrap(),
            RuleKind::Literal,
            "old",
            "new",
        );
        def.description = Some("Rename old".to_string());
        def.required = false;
        def.scope = MatchScope::First;

        let rule = LiteralRule::from_definition(&def).unwrap();
        assert_eq!(rule.description(), "Rename old");
        assert!(!rule.required());
        assert_eq!(rule.scope(), MatchScope::First);
        assert_eq!(rule.kind(), RuleKind::Literal);
    }
}
