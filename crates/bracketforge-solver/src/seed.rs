//! Seeding.

use std::cmp::Reverse;

use bracketforge_core::Team;

/// Orders teams by descending coefficient.
///
/// The sort is stable: teams with equal coefficients keep their input
/// order. The seeded order decides which feasible pairing the matcher
/// returns when several exist, and strongest-first prunes fastest because
/// high-coefficient teams have the fewest eligible opponents.
///
/// # Example
///
/// ```
/// use bracketforge_core::Team;
/// use bracketforge_solver::seed;
///
/// let teams = vec![
///     Team::new("Low", "D1", 10).unwrap(),
///     Team::new("High", "D2", 30).unwrap(),
/// ];
/// let seeded = seed(&teams);
/// assert_eq!(seeded[0].name(), "High");
/// ```
pub fn seed(teams: &[Team]) -> Vec<&Team> {
    let mut seeded: Vec<&Team> = teams.iter().collect();
    seeded.sort_by_key(|team| Reverse(team.coefficient()));
    seeded
}
