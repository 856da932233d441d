//! Team builders and canned fields.

use bracketforge_core::Team;

/// Builds a team, panicking on invalid input.
pub fn team(name: &str, division: &str, coefficient: u32) -> Team {
    Team::new(name, division, coefficient)
        .unwrap_or_else(|e| panic!("invalid fixture team '{}': {}", name, e))
}

/// A field of `size` teams where team `i` (1-based) plays in division
/// `i % 5` with coefficient `i`.
///
/// Consecutive seeds always sit in different divisions one point apart,
/// so the field is feasible at any tolerance of at least 1.
pub fn scale_field(size: usize) -> Vec<Team> {
    (1..=size)
        .map(|i| {
            team(
                &format!("Team {}", i),
                &format!("Division {}", i % 5),
                i as u32,
            )
        })
        .collect()
}

/// A field of `size` teams all in "Division 1", coefficients 10, 15, 20...
pub fn single_division_field(size: usize) -> Vec<Team> {
    (0..size)
        .map(|i| {
            team(
                &format!("Team {}", i + 1),
                "Division 1",
                10 + 5 * i as u32,
            )
        })
        .collect()
}
