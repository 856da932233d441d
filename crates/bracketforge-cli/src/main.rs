//! BracketForge CLI
//!
//! Generates a first-round tournament bracket from a CSV team list or
//! `--team` flags.

mod commands;
mod error;

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use commands::{CheckArgs, GenerateArgs};
use error::CliError;

#[derive(Parser)]
#[command(name = "bracketforge", version)]
#[command(about = "Generate seeded tournament brackets without intra-division matchups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed and pair teams, then print the bracket
    Generate(GenerateArgs),

    /// Validate a team file without pairing
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    let result = match &cli.command {
        Command::Generate(args) => commands::generate(args, &mut stdout),
        Command::Check(args) => commands::check(args, &mut stdout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &CliError) {
    eprintln!("{} {}", "error:".bright_red().bold(), err);
    if let CliError::Infeasible { unmatchable, .. } = err {
        for team in unmatchable {
            eprintln!("  {} no valid opponent for {}", "-".bright_black(), team);
        }
    }
}
