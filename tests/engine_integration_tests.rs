//! Integration tests for the rewrite engine
//!
//! These tests drive the public engine API with literal and regex rules and
//! check the properties every rule set run must hold: determinism, order
//! sensitivity, single-pass replacement, and unchanged output when nothing
//! matches.

mod common;

use rewrites::engine::{Document, Outcome, RewriteEngine};
use rewrites::rules::{LiteralRule, RegexRule, RuleSet};
use rewrites::types::{MatchScope, RuleId};

fn id(s: &str) -> RuleId {
    assert_some!(RuleId::new(s))
}

fn literal(rule_id: &str, pattern: &str, replacement: &str) -> LiteralRule {
    assert_ok!(LiteralRule::new(id(rule_id), pattern, replacement))
}

fn regex(rule_id: &str, pattern: &str, replacement: &str) -> RegexRule {
    assert_ok!(RegexRule::new(id(rule_id), pattern, replacement))
}

fn outcomes(engine: &RewriteEngine, text: &str) -> (String, Vec<Outcome>) {
    let result = engine.apply(&Document::new(text));
    let outcomes = result.outcomes.iter().map(|o| o.outcome).collect();
    (result.document.into_string(), outcomes)
}

// ============================================================================
// Ordering and determinism
// ============================================================================

#[test]
fn test_apply_is_deterministic() {
    let rules = assert_ok!(
        RuleSet::new("mixed")
            .with_rule(literal("rename", "alpha", "beta"))
            .and_then(|set| set.with_rule(regex("digits", r"(\d+)", "<$1>")))
    );
    let engine = RewriteEngine::new(rules);
    let document = Document::new("alpha 1 alpha 22\nbeta 333\n");

    let first = engine.apply(&document);
    let second = engine.apply(&document);

    assert_eq!(first, second);
    assert_eq!(first.document.as_str(), "beta <1> beta <22>\nbeta <333>\n");
}

#[test]
fn test_later_rule_sees_earlier_output() {
    let forward = assert_ok!(
        RuleSet::new("forward")
            .with_rule(literal("introduce", "old", "fresh"))
            .and_then(|set| set.with_rule(literal("consume", "fresh", "final")))
    );
    let (text, results) = outcomes(&RewriteEngine::new(forward), "old");
    assert_eq!(text, "final");
    assert_eq!(results, vec![Outcome::Applied(1), Outcome::Applied(1)]);

    let reversed = assert_ok!(
        RuleSet::new("reversed")
            .with_rule(literal("consume", "fresh", "final"))
            .and_then(|set| set.with_rule(literal("introduce", "old", "fresh")))
    );
    let (text, results) = outcomes(&RewriteEngine::new(reversed), "old");
    assert_eq!(text, "fresh");
    assert_eq!(results, vec![Outcome::NoMatch, Outcome::Applied(1)]);
}

#[test]
fn test_outcome_indices_are_one_based_and_ordered() {
    let rules = assert_ok!(
        RuleSet::new("indexed")
            .with_rule(literal("first", "x", "y"))
            .and_then(|set| set.with_rule(literal("second", "missing", "")))
            .and_then(|set| set.with_rule(literal("third", "y", "z")))
    );
    let result = RewriteEngine::new(rules).apply(&Document::new("x"));

    let indexed: Vec<(usize, &str)> = result
        .outcomes
        .iter()
        .map(|o| (o.index, o.rule_id.as_str()))
        .collect();
    assert_eq!(indexed, vec![(1, "first"), (2, "second"), (3, "third")]);

    let mismatch = assert_some!(result.mismatches().next());
    assert_eq!(mismatch.index, 2);
    assert_eq!(result.document.as_str(), "z");
}

// ============================================================================
// Replacement semantics
// ============================================================================

#[test]
fn test_literal_replacement_is_not_rescanned() {
    let rules = assert_ok!(RuleSet::new("grow").with_rule(literal("double", "a", "aa")));
    let (text, results) = outcomes(&RewriteEngine::new(rules), "a");

    assert_eq!(text, "aa");
    assert_eq!(results, vec![Outcome::Applied(1)]);
}

#[test]
fn test_regex_replacement_is_not_rescanned() {
    let rules = assert_ok!(RuleSet::new("grow").with_rule(regex("wrap", r"x+", "[x${0}x]")));
    let (text, results) = outcomes(&RewriteEngine::new(rules), "xx-x");

    assert_eq!(text, "[xxxx]-[xxx]");
    assert_eq!(results, vec![Outcome::Applied(2)]);
}

#[test]
fn test_absent_pattern_leaves_document_unchanged() {
    let original = "package views\n\nfunc main() {}\n";
    let rules = assert_ok!(
        RuleSet::new("absent")
            .with_rule(literal("literal-miss", "selectedFiles", "fileSelector"))
            .and_then(|set| set.with_rule(regex("regex-miss", r"func helper\(\)", "")))
    );
    let (text, results) = outcomes(&RewriteEngine::new(rules), original);

    assert_eq!(text.as_bytes(), original.as_bytes());
    assert_eq!(results, vec![Outcome::NoMatch, Outcome::NoMatch]);
}

#[test]
fn test_regex_group_substitution() {
    let rules = assert_ok!(RuleSet::new("groups").with_rule(regex("renumber", r"foo(\d+)", "bar$1")));
    let (text, results) = outcomes(&RewriteEngine::new(rules), "foo42 foo7");

    assert_eq!(text, "bar42 bar7");
    assert_eq!(results, vec![Outcome::Applied(2)]);
}

#[test]
fn test_first_scope_replaces_leftmost_only() {
    let rules = assert_ok!(
        RuleSet::new("first").with_rule(literal("once", "m", "M").with_scope(MatchScope::First))
    );
    let (text, results) = outcomes(&RewriteEngine::new(rules), "m m m");

    assert_eq!(text, "M m m");
    assert_eq!(results, vec![Outcome::Applied(1)]);
}

#[test]
fn test_empty_document_reports_no_match() {
    let rules = assert_ok!(RuleSet::new("empty").with_rule(regex("anything", r"\w+", "x")));
    let (text, results) = outcomes(&RewriteEngine::new(rules), "");

    assert_eq!(text, "");
    assert_eq!(results, vec![Outcome::NoMatch]);
}

// ============================================================================
// Function deletion
// ============================================================================

const HELPERS: &str = "\
func keep() {
\treturn
}

func (m *Model) dropMe() {
\tm.items = nil
}

func after() {
\treturn
}
";

#[test]
fn test_empty_replacement_deletes_function_span() {
    let rules = assert_ok!(
        RuleSet::new("delete")
            .with_rule(regex("drop-me", r"func \(m \*Model\) dropMe\(\) \{[^}]+\}\s*", ""))
    );
    let (text, results) = outcomes(&RewriteEngine::new(rules), HELPERS);

    assert_eq!(
        text,
        "func keep() {\n\treturn\n}\n\nfunc after() {\n\treturn\n}\n"
    );
    assert_eq!(results, vec![Outcome::Applied(1)]);
}

#[test]
fn test_brace_counting_pattern_stops_at_first_closing_brace() {
    // Textual deletion has no notion of nesting: the body ends at the first `}`.
    let source = "func nested() {\n\tif ok {\n\t\trun()\n\t}\n\tdone()\n}\n";
    let rules = assert_ok!(
        RuleSet::new("nested").with_rule(regex("drop-nested", r"func nested\(\) \{[^}]+\}\s*", ""))
    );
    let (text, results) = outcomes(&RewriteEngine::new(rules), source);

    assert_eq!(text, "done()\n}\n");
    assert_eq!(results, vec![Outcome::Applied(1)]);
}
