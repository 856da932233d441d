//! BracketForge - Tournament Bracket Generation in Rust
//!
//! Seeds a field of teams by coefficient and pairs them for the first round
//! so that no matchup is an intra-division game and every matchup is within
//! the coefficient tolerance.
//!
//! # Example
//!
//! ```rust
//! use bracketforge::prelude::*;
//!
//! let teams = vec![
//!     Team::new("Team A", "Division 1", 10).unwrap(),
//!     Team::new("Team B", "Division 2", 15).unwrap(),
//!     Team::new("Team C", "Division 3", 20).unwrap(),
//!     Team::new("Team D", "Division 4", 25).unwrap(),
//! ];
//!
//! let pairing = generate_bracket(&teams, &BracketConfig::default()).unwrap();
//! assert_eq!(pairing.len(), 2);
//! ```

pub mod import;

pub use bracketforge_config::{BracketConfig, ConfigError, RosterConfig, TerminationConfig};
pub use bracketforge_core::{
    validate_roster, BracketError, Matchup, Pairing, Result, RosterPolicy, Team,
};
pub use bracketforge_solver::{seed, unmatchable_teams, BracketSolver, MatchStats, Matcher};
pub use import::{import_teams, import_teams_from_path};

#[cfg(feature = "console")]
pub use bracketforge_console as console;

/// Generates the first round for `teams` under `config`.
///
/// Shorthand for [`BracketSolver::from_config`] followed by
/// [`BracketSolver::solve`].
pub fn generate_bracket<'a>(teams: &'a [Team], config: &BracketConfig) -> Result<Pairing<'a>> {
    BracketSolver::from_config(config).solve(teams)
}

pub mod prelude {
    pub use super::{generate_bracket, import_teams, import_teams_from_path};
    pub use super::{BracketConfig, BracketError, BracketSolver, Matchup, Pairing, Team};
}
