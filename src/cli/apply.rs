//! Apply command implementation
//!
//! This module implements the `rewrites apply` command, which:
//! - Resolves and parses the rule file
//! - Compiles every rule (a bad pattern stops the run before any I/O)
//! - Reads the source document
//! - Applies the rule set in order
//! - Commits the result atomically, unless this is a dry run
//! - Reports per-rule outcomes and returns an exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{
    EXIT_SUCCESS, build_rule_set, exit_code_for, load_rules, resolve_source, stderr_color,
};
use crate::engine::{FileStore, RewriteEngine, RunOptions, RunReport, run};
use crate::error::RewriteError;
use crate::output::{HumanFormatter, JsonlFormatter};
use std::path::PathBuf;
use termcolor::StandardStream;

/// Arguments of `rewrites apply`
#[derive(Debug, Clone, Default)]
pub struct ApplyArgs {
    pub source: Option<PathBuf>,
    pub rules: Option<PathBuf>,
    pub strict: bool,
    pub dry_run: bool,
    pub format: Option<OutputFormat>,
    pub color: Option<ColorChoice>,
}

/// Run the apply command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (including dry runs and unmatched rules outside strict mode)
/// - 1: A required rule matched nothing in strict mode
/// - 2: I/O error reading the rule file or the source, or writing the result
/// - 3: Invalid rule file or regex pattern
pub fn run_apply(args: &ApplyArgs) -> i32 {
    match run_apply_inner(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Internal implementation of apply command
fn run_apply_inner(args: &ApplyArgs) -> Result<(), RewriteError> {
    // 1. Resolve and parse the rule file
    let loaded = load_rules(args.rules.as_deref())?;

    // 2. Compile every rule before touching the document
    let rule_set = build_rule_set(&loaded)?;

    // 3. Settle on the source path and options (CLI flags win)
    let source = resolve_source(args.source.as_deref(), &loaded)?;
    let format = args
        .format
        .unwrap_or_else(|| loaded.config.output.format.into());
    let color = args
        .color
        .unwrap_or_else(|| loaded.config.output.color.into());
    let options = RunOptions {
        strict: args.strict || loaded.config.rewrites.strict,
        dry_run: args.dry_run,
    };

    if format == OutputFormat::Human {
        eprintln!(
            "Applying {} rules from '{}' to {}...",
            rule_set.len(),
            rule_set.name(),
            source.display()
        );
    }

    // 4. Read, rewrite, commit
    let engine = RewriteEngine::new(rule_set);
    let report = run(&FileStore::new(), &source, &engine, options)?;

    // 5. Report
    match format {
        OutputFormat::Human => print_human_output(&report, color),
        OutputFormat::Jsonl => print!("{}", JsonlFormatter::new().format(&report)),
    }

    Ok(())
}

/// Print the human-readable report to stderr
fn print_human_output(report: &RunReport, color: ColorChoice) {
    let mut stderr = StandardStream::stderr(stderr_color(color));
    if let Err(e) = HumanFormatter::new().write_report(&mut stderr, report) {
        eprintln!("Warning: Failed to write report: {}", e);
    }
}
