#![forbid(unsafe_code)]

//! Full rewrite run: read, apply, check, commit
//!
//! The document is read once and written at most once. Nothing is written
//! unless every earlier step succeeded, and in strict mode unless every
//! required rule matched.

use crate::engine::{Document, DocumentStore, RewriteEngine, RewriteResult};
use crate::error::RewriteError;
use std::path::{Path, PathBuf};

/// Knobs for a single run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Fail with `RuleMismatch` when a required rule matches nothing
    pub strict: bool,
    /// Apply the rules and report, but never write
    pub dry_run: bool,
}

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub source: PathBuf,
    pub result: RewriteResult,
    /// Final document differs from the one that was read
    pub changed: bool,
    /// The final document was committed to `source`
    pub written: bool,
    pub dry_run: bool,
}

/// Rewrite the document at `source` with `engine`'s rule set
///
/// Required rules that match nothing are reported as warnings on stderr and
/// the run continues, unless `options.strict` is set.
///
/// # Errors
///
/// - `RewriteError::Store` if the source cannot be read or the result cannot
///   be committed
/// - `RewriteError::RuleMismatch` for the first unmatched required rule in
///   strict mode; nothing is written in that case
pub fn run<S: DocumentStore + ?Sized>(
    store: &S,
    source: &Path,
    engine: &RewriteEngine,
    options: RunOptions,
) -> Result<RunReport, RewriteError> {
    let original: Document = store.read(source)?;
    let result = engine.apply(&original);

    if let Some(mismatch) = result.mismatches().next() {
        if options.strict {
            return Err(RewriteError::RuleMismatch {
                index: mismatch.index,
                rule_id: mismatch.rule_id.clone(),
            });
        }
        for mismatch in result.mismatches() {
            eprintln!(
                "Warning: rule #{} '{}' matched nothing in {}",
                mismatch.index,
                mismatch.rule_id,
                source.display()
            );
        }
    }

    let changed = result.document != original;
    let written = changed && !options.dry_run;
    if written {
        store.write(source, &result.document)?;
    }

    Ok(RunReport {
        source: source.to_path_buf(),
        result,
        changed,
        written,
        dry_run: options.dry_run,
    })
}
