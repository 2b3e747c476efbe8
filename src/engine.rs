//! Rewrite engine, document storage and run orchestration

pub mod document;
pub mod executor;
pub mod orchestrator;
pub mod store;

pub use document::Document;
pub use executor::{Outcome, RewriteEngine, RewriteResult, RuleOutcome};
pub use orchestrator::{RunOptions, RunReport, run};
pub use store::{DocumentStore, FileStore};
