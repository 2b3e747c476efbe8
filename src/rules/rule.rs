#![forbid(unsafe_code)]

//! Core Rule trait and the result of applying a rule to a buffer

use crate::types::{MatchScope, RuleId, RuleKind};

/// Text produced by a rule that matched at least once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The buffer after every replacement was substituted
    pub text: String,

    /// Number of spans that were replaced (always at least 1)
    pub matches: usize,
}

/// Trait that all rewrite rules must implement
///
/// A rule locates spans in a buffer and substitutes replacement text for
/// them. Applying a rule is pure: it never performs I/O and never fails on
/// textual grounds. All matches are located against the buffer as it was
/// passed in, so text produced by a replacement is never rescanned by the
/// same rule.
pub trait Rule: Send + Sync {
    /// Returns the unique identifier for this rule
    fn id(&self) -> &RuleId;

    /// Returns a human-readable description of what this rule rewrites
    fn description(&self) -> &str;

    /// Returns how this rule matches text
    fn kind(&self) -> RuleKind;

    /// Returns the pattern source as written by the rule author
    fn pattern(&self) -> &str;

    /// Returns the replacement text or template
    fn replacement(&self) -> &str;

    /// Whether the rule is expected to match at least once
    fn required(&self) -> bool;

    /// Which matches are replaced
    fn scope(&self) -> MatchScope;

    /// Applies the rule to `content`
    ///
    /// Returns `None` when nothing matched; the caller keeps its buffer
    /// untouched in that case.
    fn apply(&self, content: &str) -> Option<Rewrite>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock rule that upper-cases the whole buffer when it contains a marker
    struct ShoutRule {
        id: RuleId,
    }

    impl Rule for ShoutRule {
        fn id(&self) -> &RuleId {
            &self.id
        }

        fn description(&self) -> &str {
            "shout"
        }

        fn kind(&self) -> RuleKind {
            RuleKind::Literal
        }

        fn pattern(&self) -> &str {
            "!"
        }

        fn replacement(&self) -> &str {
            ""
        }

        fn required(&self) -> bool {
            false
        }

        fn scope(&self) -> MatchScope {
            MatchScope::All
        }

        fn apply(&self, content: &str) -> Option<Rewrite> {
            content.contains('!').then(|| Rewrite {
                text: content.to_uppercase(),
                matches: 1,
            })
        }
    }

    #[test]
    fn test_rule_trait_implementation() {
        let rule = ShoutRule {
            id: RuleId::new("shout").unwrap(),
        };

        assert_eq!(rule.id().as_str(), "shout");
        assert_eq!(rule.kind(), RuleKind::Literal);
        assert!(!rule.required());
        assert_eq!(rule.apply("quiet"), None);
        assert_eq!(
            rule.apply("loud!"),
            Some(Rewrite {
                text: "LOUD!".to_string(),
                matches: 1
            })
        );
    }

    #[test]
    fn test_rule_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Box<dyn Rule>>();
        assert_sync::<Box<dyn Rule>>();
    }
}
