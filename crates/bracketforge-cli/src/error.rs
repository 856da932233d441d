use std::io;

use bracketforge::{BracketError, ConfigError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Bracket(#[from] BracketError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid --team '{value}': {reason}")]
    TeamArg { value: String, reason: String },

    #[error("No teams given; use --teams FILE or --team \"name,division,coefficient\"")]
    NoTeams,

    /// No pairing exists; `unmatchable` names teams without any valid opponent.
    #[error("{source}")]
    Infeasible {
        source: BracketError,
        unmatchable: Vec<String>,
    },

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}
