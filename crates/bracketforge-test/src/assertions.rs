//! Pairing checks.

use std::collections::HashSet;

use bracketforge_core::{Pairing, Team};

/// Asserts that `pairing` partitions `teams` into valid matchups.
///
/// Every team must appear in exactly one matchup (by identity), each
/// matchup must join two different divisions, and paired coefficients may
/// differ by at most `tolerance`.
///
/// # Panics
///
/// Panics with a description of the first violation found.
pub fn assert_valid_pairing(teams: &[Team], pairing: &Pairing<'_>, tolerance: u32) {
    assert_eq!(
        pairing.team_count(),
        teams.len(),
        "pairing covers {} teams, field has {}",
        pairing.team_count(),
        teams.len()
    );

    let mut seen: HashSet<*const Team> = HashSet::with_capacity(teams.len());
    for team in pairing.iter().flat_map(|m| m.teams()) {
        assert!(seen.insert(team as *const Team), "{} appears more than once", team);
    }
    for team in teams {
        assert!(seen.contains(&(team as *const Team)), "{} is not paired", team);
    }

    for matchup in pairing {
        let (home, away) = (matchup.home(), matchup.away());
        assert!(!std::ptr::eq(home, away), "{} is paired with itself", home);
        assert_ne!(
            home.division(),
            away.division(),
            "same-division matchup: {}",
            matchup
        );
        assert!(
            home.coefficient().abs_diff(away.coefficient()) <= tolerance,
            "coefficient gap above {}: {}",
            tolerance,
            matchup
        );
    }
}
