#![forbid(unsafe_code)]

//! Human-readable run report
//!
//! One line per rule in application order, followed by a one-line summary.
//! Colors go through `termcolor`, so the caller decides whether the stream
//! is colored.

use crate::engine::{Outcome, RuleOutcome, RunReport};
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Human-readable formatter for run reports
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the per-rule outcomes and the summary line
    pub fn write_report(&self, out: &mut dyn WriteColor, report: &RunReport) -> io::Result<()> {
        writeln!(out)?;
        for outcome in &report.result.outcomes {
            self.write_outcome(out, outcome)?;
        }
        writeln!(out)?;
        self.write_summary(out, report)
    }

    fn write_outcome(&self, out: &mut dyn WriteColor, outcome: &RuleOutcome) -> io::Result<()> {
        write!(
            out,
            "  {:>2}. {} ({}) ",
            outcome.index, outcome.rule_id, outcome.kind
        )?;

        match outcome.outcome {
            Outcome::Applied(n) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(out, "✓ applied")?;
                out.reset()?;
                writeln!(out, " ({} {})", n, if n == 1 { "match" } else { "matches" })
            }
            Outcome::NoMatch if outcome.required => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
                write!(out, "✗ no match")?;
                out.reset()?;
                writeln!(out, " (required)")
            }
            Outcome::NoMatch => writeln!(out, "- no match"),
        }
    }

    fn write_summary(&self, out: &mut dyn WriteColor, report: &RunReport) -> io::Result<()> {
        let applied = report.result.applied_count();
        let total = report.result.outcomes.len();
        let path = report.source.display();

        if !report.changed {
            return writeln!(out, "{} unchanged: no rule altered the document", path);
        }

        if report.dry_run {
            writeln!(
                out,
                "Dry run: {} would be rewritten ({} of {} rules applied)",
                path, applied, total
            )
        } else {
            out.set_color(ColorSpec::new().set_bold(true))?;
            write!(out, "Rewrote {}", path)?;
            out.reset()?;
            writeln!(out, ": {} of {} rules applied", applied, total)
        }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}
