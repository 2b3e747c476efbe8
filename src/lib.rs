#![forbid(unsafe_code)]

//! Rewrites: deterministic, rule-driven source rewriting
//!
//! A rule set is an ordered list of literal and regex replacements. The
//! engine threads a document through every rule in turn, reports what each
//! rule did, and the result is committed back to the source file in a single
//! atomic write.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, RewriteError, RuleError, StoreError};

// Re-export core domain types for convenient access
pub use engine::{Document, Outcome, RewriteEngine, RewriteResult, RuleOutcome};
pub use rules::{LiteralRule, RegexRule, Rule, RuleSet};
pub use types::{MatchScope, RuleId, RuleKind};
