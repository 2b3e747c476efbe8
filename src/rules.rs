#![forbid(unsafe_code)]

//! Rule definitions, built-in rule sets and ordered rule sets

pub mod builtin;
mod literal_rule;
mod regex_rule;
mod rule;
mod rule_set;

// Re-export core types
pub use builtin::{DEFAULT_BUILTIN, builtin_names, load_builtin};
pub use literal_rule::LiteralRule;
pub use regex_rule::RegexRule;
pub use rule::{Rewrite, Rule};
pub use rule_set::{RuleSet, build_rule};
