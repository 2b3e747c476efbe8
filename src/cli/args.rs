//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for rewrites commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

impl From<crate::config::OutputFormat> for OutputFormat {
    fn from(format: crate::config::OutputFormat) -> Self {
        match format {
            crate::config::OutputFormat::Human => OutputFormat::Human,
            crate::config::OutputFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<crate::config::ColorOption> for ColorChoice {
    fn from(color: crate::config::ColorOption) -> Self {
        match color {
            crate::config::ColorOption::Auto => ColorChoice::Auto,
            crate::config::ColorOption::Always => ColorChoice::Always,
            crate::config::ColorOption::Never => ColorChoice::Never,
        }
    }
}

/// Rewrites CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "rewrites")]
#[command(about = "Deterministic, rule-driven source rewriting")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (defaults to the rule file's setting, then auto)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,
}

/// Available rewrites subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a rule set to a source file and write the result back
    Apply {
        /// File to rewrite (defaults to the rule file's `source`)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Rule file (defaults to ./rewrites.toml, then the builtin rule set)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Fail when a required rule matches nothing
        #[arg(long)]
        strict: bool,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,

        /// Output format (defaults to the rule file's setting, then human)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// List the rules of the resolved rule set in application order
    List {
        /// Rule file (defaults to ./rewrites.toml, then the builtin rule set)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Write a starter rewrites.toml in the current directory
    Init {
        /// Overwrite an existing rewrites.toml
        #[arg(long)]
        force: bool,
    },
}
