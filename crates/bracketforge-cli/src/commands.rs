//! `generate` and `check` subcommands.

use std::io::Write;
use std::path::{Path, PathBuf};

use bracketforge::console::render_bracket;
use bracketforge::{
    import_teams_from_path, seed, unmatchable_teams, validate_roster, BracketConfig,
    BracketError, BracketSolver, Team,
};
use clap::Args;

use crate::error::CliError;

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "bracket.toml";

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// CSV file with a header row and `name,division,coefficient` rows
    #[arg(long, value_name = "FILE")]
    pub teams: Option<PathBuf>,

    /// Add a team (repeatable)
    #[arg(long = "team", value_name = "NAME,DIVISION,COEF")]
    pub team: Vec<String>,

    /// Config file (TOML or YAML); defaults to ./bracket.toml when present
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum coefficient difference within a matchup
    #[arg(long)]
    pub tolerance: Option<u32>,

    /// Accept any even number of teams instead of a power of two
    #[arg(long)]
    pub any_even: bool,

    /// Suppress solver log output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// CSV file to validate
    pub file: PathBuf,

    /// Config file (TOML or YAML); defaults to ./bracket.toml when present
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Accept any even number of teams instead of a power of two
    #[arg(long)]
    pub any_even: bool,
}

/// Loads `explicit` if given, else `fallback` if it exists, else defaults.
pub fn load_config(explicit: Option<&Path>, fallback: &Path) -> Result<BracketConfig, CliError> {
    match explicit {
        Some(path) => Ok(BracketConfig::load(path)?),
        None if fallback.exists() => Ok(BracketConfig::load(fallback)?),
        None => Ok(BracketConfig::default()),
    }
}

/// Parses a `--team` value of the form `name,division,coefficient`.
pub fn parse_team_arg(value: &str) -> Result<Team, CliError> {
    let fields: Vec<&str> = value.split(',').collect();
    if fields.len() != 3 {
        return Err(CliError::TeamArg {
            value: value.to_string(),
            reason: format!(
                "expected 3 fields (name, division, coefficient), found {}",
                fields.len()
            ),
        });
    }

    Team::parse(fields[0], fields[1], fields[2]).map_err(|e| CliError::TeamArg {
        value: value.to_string(),
        reason: match e {
            BracketError::InvalidTeam(reason) => reason,
            other => other.to_string(),
        },
    })
}

/// Collects teams from the import file first, then from `--team` flags.
fn collect_teams(args: &GenerateArgs) -> Result<Vec<Team>, CliError> {
    let mut teams = match &args.teams {
        Some(path) => import_teams_from_path(path)?,
        None => Vec::new(),
    };
    for value in &args.team {
        teams.push(parse_team_arg(value)?);
    }
    if teams.is_empty() {
        return Err(CliError::NoTeams);
    }
    Ok(teams)
}

pub fn generate(args: &GenerateArgs, out: &mut impl Write) -> Result<(), CliError> {
    generate_with_fallback(args, Path::new(DEFAULT_CONFIG_FILE), out)
}

fn generate_with_fallback(
    args: &GenerateArgs,
    fallback: &Path,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut config = load_config(args.config.as_deref(), fallback)?;
    if let Some(tolerance) = args.tolerance {
        config = config.with_tolerance(tolerance);
    }
    if args.any_even {
        config = config.allow_any_even_count();
    }

    if !args.quiet {
        bracketforge::console::init();
    }

    let teams = collect_teams(args)?;
    let solver = BracketSolver::from_config(&config);

    match solver.solve(&teams) {
        Ok(pairing) => {
            write!(out, "{}", render_bracket(&pairing))?;
            Ok(())
        }
        Err(e @ BracketError::NoFeasiblePairing) => {
            let seeded = seed(&teams);
            let unmatchable = unmatchable_teams(&seeded, solver.matcher().constraint())
                .into_iter()
                .map(|t| t.to_string())
                .collect();
            Err(CliError::Infeasible {
                source: e,
                unmatchable,
            })
        }
        Err(e) => Err(e.into()),
    }
}

pub fn check(args: &CheckArgs, out: &mut impl Write) -> Result<(), CliError> {
    check_with_fallback(args, Path::new(DEFAULT_CONFIG_FILE), out)
}

fn check_with_fallback(
    args: &CheckArgs,
    fallback: &Path,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut config = load_config(args.config.as_deref(), fallback)?;
    if args.any_even {
        config = config.allow_any_even_count();
    }

    let teams = import_teams_from_path(&args.file)?;
    validate_roster(&teams, &config.roster_policy())?;

    writeln!(out, "{} teams ready:", teams.len())?;
    for (i, team) in seed(&teams).iter().enumerate() {
        writeln!(out, "{:>3}. {}", i + 1, team)?;
    }
    Ok(())
}
