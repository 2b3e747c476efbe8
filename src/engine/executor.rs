#![forbid(unsafe_code)]

//! Rewrite engine that threads a document through an ordered rule set
//!
//! Each rule sees exactly the buffer produced by the rule before it. The
//! engine performs no I/O and cannot fail: a rule that matches nothing is
//! recorded as `NoMatch` and the buffer is passed on unchanged.

use crate::engine::Document;
use crate::rules::{Rule, RuleSet};
use crate::types::{RuleId, RuleKind};

/// What a single rule did to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The rule replaced this many spans
    Applied(usize),
    /// The rule's pattern did not occur in the buffer
    NoMatch,
}

impl Outcome {
    /// Number of replaced spans (0 for `NoMatch`)
    pub fn matches(&self) -> usize {
        match self {
            Outcome::Applied(n) => *n,
            Outcome::NoMatch => 0,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Applied(_) => "applied",
            Outcome::NoMatch => "no_match",
        }
    }
}

/// Outcome of one rule, tagged with its position in the rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// 1-based position of the rule in its rule set
    pub index: usize,
    pub rule_id: RuleId,
    pub kind: RuleKind,
    pub required: bool,
    pub outcome: Outcome,
}

impl RuleOutcome {
    /// A required rule that matched nothing
    pub fn is_mismatch(&self) -> bool {
        self.required && self.outcome == Outcome::NoMatch
    }
}

/// Result of applying a whole rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    /// The buffer produced by the last rule
    pub document: Document,
    /// One entry per rule, in application order
    pub outcomes: Vec<RuleOutcome>,
}

impl RewriteResult {
    /// Rules that matched at least once
    pub fn applied_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_applied()).count()
    }

    /// Rules that matched nothing, required or not
    pub fn unmatched(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| !o.outcome.is_applied())
    }

    /// Required rules that matched nothing
    pub fn mismatches(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| o.is_mismatch())
    }

    /// Total replaced spans across all rules
    pub fn total_matches(&self) -> usize {
        self.outcomes.iter().map(|o| o.outcome.matches()).sum()
    }
}

/// Applies an ordered rule set to documents
#[derive(Debug)]
pub struct RewriteEngine {
    rules: RuleSet,
}

impl RewriteEngine {
    /// Creates a new RewriteEngine over a compiled rule set
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Apply every rule in order, starting from `document`
    ///
    /// The input is left untouched; the returned result owns the final
    /// buffer and one outcome per rule.
    pub fn apply(&self, document: &Document) -> RewriteResult {
        let mut buffer = document.as_str().to_string();
        let mut outcomes = Vec::with_capacity(self.rules.len());

        for (position, rule) in self.rules.iter().enumerate() {
            let outcome = apply_rule(rule, &mut buffer);
            outcomes.push(RuleOutcome {
                index: position + 1,
                rule_id: rule.id().clone(),
                kind: rule.kind(),
                required: rule.required(),
                outcome,
            });
        }

        RewriteResult {
            document: Document::new(buffer),
            outcomes,
        }
    }
}

/// Apply one rule to `buffer` in place
fn apply_rule(rule: &dyn Rule, buffer: &mut String) -> Outcome {
    match rule.apply(buffer) {
        Some(rewrite) => {
            *buffer = rewrite.text;
            Outcome::Applied(rewrite.matches)
        }
        None => Outcome::NoMatch,
    }
}
