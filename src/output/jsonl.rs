#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. One outcome record per rule, in application order
//! 2. One status record

use crate::engine::RunReport;
use serde::Serialize;
use std::path::PathBuf;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format a run report as JSONL
    pub fn format(&self, report: &RunReport) -> String {
        let mut output = String::new();

        for outcome in &report.result.outcomes {
            let record = OutcomeRecord {
                record_type: "outcome",
                index: outcome.index,
                rule: outcome.rule_id.as_str(),
                kind: outcome.kind.as_str(),
                required: outcome.required,
                status: outcome.outcome.as_str(),
                matches: outcome.outcome.matches(),
            };
            push_line(&mut output, &record);
        }

        let status = StatusRecord {
            record_type: "status",
            source: report.source.clone(),
            changed: report.changed,
            written: report.written,
            dry_run: report.dry_run,
            rules_applied: report.result.applied_count(),
            rules_unmatched: report.result.unmatched().count(),
            total_matches: report.result.total_matches(),
        };
        push_line(&mut output, &status);

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line<T: Serialize>(output: &mut String, record: &T) {
    match serde_json::to_string(record) {
        Ok(json) => {
            output.push_str(&json);
            output.push('\n');
        }
        Err(e) => eprintln!("Warning: Failed to serialize JSONL record: {}", e),
    }
}

/// Per-rule record for JSONL output
#[derive(Debug, Serialize)]
struct OutcomeRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    index: usize,
    rule: &'a str,
    kind: &'static str,
    required: bool,
    status: &'static str,
    matches: usize,
}

/// Run status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    source: PathBuf,
    changed: bool,
    written: bool,
    dry_run: bool,
    rules_applied: usize,
    rules_unmatched: usize,
    total_matches: usize,
}
