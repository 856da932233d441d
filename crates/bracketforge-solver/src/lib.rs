//! BracketForge Solver Engine
//!
//! This crate provides the matchup assignment:
//! - Seeding (descending coefficient, stable)
//! - Matchup constraints (distinct divisions, coefficient tolerance)
//! - Backtracking matcher with forward checking
//! - Host search guards (step count, time)
//! - `BracketSolver`, wiring configuration to the matcher

pub mod builder;
pub mod constraint;
pub mod matcher;
pub mod scope;
pub mod seed;
pub mod solver;
pub mod termination;

#[cfg(test)]
mod test_utils;

pub use builder::TerminationBuilder;
pub use constraint::{
    CoefficientTolerance, DistinctDivisions, MatchupConstraint, ValidityConstraint,
    DEFAULT_TOLERANCE,
};
pub use matcher::{unmatchable_teams, Matcher};
pub use scope::{MatchStats, SearchScope};
pub use seed::seed;
pub use solver::BracketSolver;
pub use termination::{OrTermination, StepCountTermination, Termination, TimeTermination};
