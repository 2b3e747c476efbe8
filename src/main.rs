//! Rewrites CLI entry point

use clap::Parser;
use rewrites::cli::apply::ApplyArgs;
use rewrites::cli::init::InitOutcome;
use rewrites::cli::{Command, args::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();
    let color = cli.color;

    let exit_code = match cli.command {
        Command::Init { force } => match rewrites::cli::init::run_init(force) {
            Ok(InitOutcome::Skipped) => {
                eprintln!("rewrites.toml already exists. Use --force to overwrite it.");
                0
            }
            Ok(_) => {
                println!("Created rewrites.toml. Edit its [[rule]] tables, then run 'rewrites apply'.");
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                2
            }
        },
        Command::Apply {
            source,
            rules,
            strict,
            dry_run,
            format,
        } => rewrites::cli::apply::run_apply(&ApplyArgs {
            source,
            rules,
            strict,
            dry_run,
            format,
            color,
        }),
        Command::List { rules, format } => {
            rewrites::cli::list::run_list(rules.as_deref(), format)
        }
    };

    process::exit(exit_code);
}
