//! Bracket solver: validation, seeding and matching in one call.
//!
//! Logging levels:
//! - **INFO**: Solve start/end with field size and search statistics
//! - **TRACE**: Backtracks inside the matcher

use std::collections::HashSet;

use bracketforge_config::BracketConfig;
use bracketforge_core::{validate_roster, Pairing, Result, RosterPolicy, Team};
use tracing::info;

use crate::builder::TerminationBuilder;
use crate::constraint::ValidityConstraint;
use crate::matcher::Matcher;
use crate::scope::{MatchStats, SearchScope};
use crate::seed::seed;

/// Generates a first round from a field of teams.
///
/// # Example
///
/// ```
/// use bracketforge_core::Team;
/// use bracketforge_solver::BracketSolver;
///
/// let teams = vec![
///     Team::new("Team A", "Division 1", 10).unwrap(),
///     Team::new("Team B", "Division 2", 15).unwrap(),
///     Team::new("Team C", "Division 3", 20).unwrap(),
///     Team::new("Team D", "Division 4", 25).unwrap(),
/// ];
///
/// let pairing = BracketSolver::default().solve(&teams).unwrap();
/// assert_eq!(pairing.len(), 2);
/// ```
#[derive(Debug)]
pub struct BracketSolver {
    matcher: Matcher<ValidityConstraint>,
    policy: RosterPolicy,
}

impl Default for BracketSolver {
    fn default() -> Self {
        Self::from_config(&BracketConfig::default())
    }
}

impl BracketSolver {
    /// Creates an unbounded solver with the default roster policy.
    pub fn new(tolerance: u32) -> Self {
        Self {
            matcher: Matcher::with_tolerance(tolerance),
            policy: RosterPolicy::default(),
        }
    }

    /// Creates a solver from configuration: tolerance, roster policy and
    /// search limits.
    pub fn from_config(config: &BracketConfig) -> Self {
        Self {
            matcher: Matcher::with_tolerance(config.tolerance)
                .with_boxed_termination(TerminationBuilder::from_bracket_config(config)),
            policy: config.roster_policy(),
        }
    }

    pub fn with_roster_policy(mut self, policy: RosterPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn tolerance(&self) -> u32 {
        self.matcher.constraint().tolerance()
    }

    pub fn roster_policy(&self) -> &RosterPolicy {
        &self.policy
    }

    pub fn matcher(&self) -> &Matcher<ValidityConstraint> {
        &self.matcher
    }

    /// Validates, seeds and pairs `teams`.
    ///
    /// # Errors
    ///
    /// - [`InvalidEntityCount`](bracketforge_core::BracketError::InvalidEntityCount)
    ///   if the field breaks the roster policy; the matcher is not run.
    /// - [`NoFeasiblePairing`](bracketforge_core::BracketError::NoFeasiblePairing)
    ///   if no pairing exists.
    /// - [`SearchLimitExceeded`](bracketforge_core::BracketError::SearchLimitExceeded)
    ///   if a configured limit stopped the search.
    pub fn solve<'a>(&self, teams: &'a [Team]) -> Result<Pairing<'a>> {
        self.solve_with_stats(teams).0
    }

    /// Like [`solve`](Self::solve), also returning search statistics.
    pub fn solve_with_stats<'a>(&self, teams: &'a [Team]) -> (Result<Pairing<'a>>, MatchStats) {
        if let Err(e) = validate_roster(teams, &self.policy) {
            return (Err(e), MatchStats::default());
        }

        let divisions: HashSet<&str> = teams.iter().map(|t| t.division()).collect();
        info!(
            event = "solve_start",
            team_count = teams.len() as u64,
            division_count = divisions.len() as u64,
            tolerance = self.tolerance() as u64,
        );

        let seeded = seed(teams);
        let mut scope = SearchScope::new();
        let result = self.matcher.find_pairing_in_scope(&seeded, &mut scope);
        let stats = scope.stats();

        info!(
            event = "solve_end",
            matchups = result.as_ref().map_or(0, |p| p.len() as u64),
            steps = stats.steps,
            backtracks = stats.backtracks,
            duration_ms = stats.elapsed.as_millis() as u64,
            feasible = result.is_ok(),
        );

        (result, stats)
    }
}
