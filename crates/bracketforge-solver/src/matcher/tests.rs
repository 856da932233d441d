//! Tests for the backtracking matcher.

use super::*;
use crate::constraint::DistinctDivisions;
use crate::seed;
use crate::termination::StepCountTermination;
use crate::test_utils::{capture_events, events_named};
use bracketforge_test::{assert_valid_pairing, scale_field, single_division_field, team};

fn pair_names(pairing: &Pairing<'_>) -> Vec<(String, String)> {
    pairing
        .iter()
        .map(|m| (m.home().name().to_string(), m.away().name().to_string()))
        .collect()
}

#[test]
fn test_two_teams_within_tolerance() {
    let teams = vec![team("A", "D1", 30), team("B", "D2", 10)];
    let seeded = seed(&teams);

    let pairing = Matcher::with_tolerance(20).find_pairing(&seeded).unwrap();
    assert_eq!(pairing.len(), 1);
    assert!(std::ptr::eq(pairing.matchups()[0].home(), &teams[0]));
    assert!(std::ptr::eq(pairing.matchups()[0].away(), &teams[1]));
}

#[test]
fn test_two_teams_beyond_tolerance() {
    let teams = vec![team("A", "D1", 31), team("B", "D2", 10)];
    let seeded = seed(&teams);

    let err = Matcher::with_tolerance(20).find_pairing(&seeded).unwrap_err();
    assert_eq!(err, BracketError::NoFeasiblePairing);
}

#[test]
fn test_two_teams_same_division() {
    let teams = vec![team("A", "D1", 10), team("B", "D1", 10)];
    let seeded = seed(&teams);

    let err = Matcher::default().find_pairing(&seeded).unwrap_err();
    assert_eq!(err, BracketError::NoFeasiblePairing);
}

#[test]
fn test_minimal_infeasible_field() {
    let teams = vec![
        team("Team A", "D1", 10),
        team("Team B", "D1", 15),
        team("Team C", "D1", 20),
        team("Team D", "D1", 25),
    ];
    let seeded = seed(&teams);

    let err = Matcher::default().find_pairing(&seeded).unwrap_err();
    assert_eq!(err, BracketError::NoFeasiblePairing);
}

#[test]
fn test_four_distinct_divisions() {
    let teams = vec![
        team("Team A", "Division 1", 10),
        team("Team B", "Division 2", 15),
        team("Team C", "Division 3", 20),
        team("Team D", "Division 4", 25),
    ];
    let seeded = seed(&teams);

    let pairing = Matcher::default().find_pairing(&seeded).unwrap();
    assert_valid_pairing(&teams, &pairing, 20);
    assert_eq!(
        pair_names(&pairing),
        vec![
            ("Team D".to_string(), "Team C".to_string()),
            ("Team B".to_string(), "Team A".to_string()),
        ]
    );
}

#[test]
fn test_backtracks_out_of_greedy_choice() {
    // A-B is tried first and leaves C and D in the same division.
    let teams = vec![
        team("A", "X", 40),
        team("B", "Y", 39),
        team("C", "Z", 38),
        team("D", "Z", 37),
    ];
    let seeded = seed(&teams);
    let mut scope = SearchScope::new();

    let pairing = Matcher::default()
        .find_pairing_in_scope(&seeded, &mut scope)
        .unwrap();

    assert_valid_pairing(&teams, &pairing, 20);
    assert_eq!(
        pair_names(&pairing),
        vec![
            ("A".to_string(), "C".to_string()),
            ("B".to_string(), "D".to_string()),
        ]
    );
    assert_eq!(scope.backtrack_count(), 1);
    assert_eq!(scope.step_count(), 3);
}

#[test]
fn test_home_team_without_partner_fails_branch() {
    // The strongest team is out of reach of everyone else.
    let teams = vec![
        team("A", "D1", 100),
        team("B", "D2", 20),
        team("C", "D3", 15),
        team("D", "D4", 10),
    ];
    let seeded = seed(&teams);
    let mut scope = SearchScope::new();

    let err = Matcher::default()
        .find_pairing_in_scope(&seeded, &mut scope)
        .unwrap_err();

    assert_eq!(err, BracketError::NoFeasiblePairing);
    assert_eq!(scope.step_count(), 0);
}

#[test]
fn test_deterministic_and_referentially_equal() {
    let teams = scale_field(16);
    let seeded = seed(&teams);
    let matcher = Matcher::default();

    let first = matcher.find_pairing(&seeded).unwrap();
    let second = matcher.find_pairing(&seeded).unwrap();

    assert!(first.same_as(&second));
    for (a, b) in first.iter().zip(second.iter()) {
        assert!(std::ptr::eq(a.home(), b.home()));
        assert!(std::ptr::eq(a.away(), b.away()));
    }
}

#[test]
fn test_seed_order_decides_pairing() {
    let teams = vec![
        team("A", "D1", 10),
        team("B", "D2", 10),
        team("C", "D3", 10),
        team("D", "D4", 10),
    ];
    let forward: Vec<&Team> = teams.iter().collect();
    let reversed: Vec<&Team> = teams.iter().rev().collect();
    let matcher = Matcher::default();

    let a = matcher.find_pairing(&forward).unwrap();
    let b = matcher.find_pairing(&reversed).unwrap();

    assert_eq!(pair_names(&a)[0], ("A".to_string(), "B".to_string()));
    assert_eq!(pair_names(&b)[0], ("D".to_string(), "C".to_string()));
}

#[test]
fn test_scale_field_of_64() {
    let teams = scale_field(64);
    let seeded = seed(&teams);

    let pairing = Matcher::with_tolerance(20).find_pairing(&seeded).unwrap();
    assert_eq!(pairing.len(), 32);
    assert_valid_pairing(&teams, &pairing, 20);
}

#[test]
fn test_single_division_field_of_any_size() {
    for size in [2, 4, 8, 16] {
        let teams = single_division_field(size);
        let seeded = seed(&teams);
        assert_eq!(
            Matcher::default().find_pairing(&seeded).unwrap_err(),
            BracketError::NoFeasiblePairing
        );
    }
}

#[test]
fn test_empty_and_odd_input_rejected() {
    let teams = vec![team("A", "D1", 10), team("B", "D2", 10), team("C", "D3", 10)];
    let seeded = seed(&teams);
    let matcher = Matcher::default();

    assert!(matches!(
        matcher.find_pairing(&[]),
        Err(BracketError::InvalidEntityCount { count: 0, .. })
    ));
    assert!(matches!(
        matcher.find_pairing(&seeded),
        Err(BracketError::InvalidEntityCount { count: 3, .. })
    ));
}

#[test]
fn test_custom_constraint() {
    let teams = vec![team("A", "D1", 100), team("B", "D2", 1)];
    let seeded = seed(&teams);

    let pairing = Matcher::new(DistinctDivisions).find_pairing(&seeded).unwrap();
    assert_eq!(pairing.len(), 1);
}

#[test]
fn test_step_limit_reports_search_limit() {
    let teams = vec![
        team("A", "X", 40),
        team("B", "Y", 39),
        team("C", "Z", 38),
        team("D", "Z", 37),
    ];
    let seeded = seed(&teams);
    let matcher = Matcher::default().with_termination(StepCountTermination::new(2));

    let err = matcher.find_pairing(&seeded).unwrap_err();
    assert_eq!(err, BracketError::SearchLimitExceeded { steps: 2 });
    assert!(err.is_infeasible());
}

#[test]
fn test_generous_step_limit_does_not_interfere() {
    let teams = scale_field(32);
    let seeded = seed(&teams);
    let matcher = Matcher::default().with_termination(StepCountTermination::new(1_000));

    assert_eq!(matcher.find_pairing(&seeded).unwrap().len(), 16);
}

#[test]
fn test_input_not_mutated() {
    let teams = scale_field(8);
    let before = teams.clone();
    let seeded = seed(&teams);

    let _ = Matcher::default().find_pairing(&seeded);
    assert_eq!(teams, before);
}

#[test]
fn test_unmatchable_teams() {
    let teams = vec![
        team("A", "D1", 100),
        team("B", "D2", 20),
        team("C", "D3", 15),
        team("D", "D1", 10),
    ];
    let seeded = seed(&teams);

    let isolated = unmatchable_teams(&seeded, &ValidityConstraint::default());
    assert_eq!(isolated.len(), 1);
    assert_eq!(isolated[0].name(), "A");
}

#[test]
fn test_large_field_does_not_recurse() {
    let teams = scale_field(16384);
    let seeded = seed(&teams);

    let pairing = Matcher::default().find_pairing(&seeded).unwrap();
    assert_eq!(pairing.len(), 8192);
    assert_valid_pairing(&teams, &pairing, 20);
}

#[test]
fn test_large_field_runs_on_small_thread_stack() {
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let teams = scale_field(4096);
            let seeded = seed(&teams);
            Matcher::default().find_pairing(&seeded).map(|p| p.len())
        })
        .unwrap();

    assert_eq!(handle.join().unwrap(), Ok(2048));
}

#[test]
fn test_backtrack_event_names_undone_matchup() {
    let teams = vec![
        team("A", "X", 40),
        team("B", "Y", 39),
        team("C", "Z", 38),
        team("D", "Z", 37),
    ];
    let seeded = seed(&teams);

    let (result, events) = capture_events(|| Matcher::default().find_pairing(&seeded));
    assert!(result.is_ok());

    let backtracks = events_named(&events, "backtrack");
    assert_eq!(backtracks.len(), 1);
    assert_eq!(backtracks[0].level, tracing::Level::TRACE);
    assert_eq!(backtracks[0].field("depth"), Some("0"));
    assert_eq!(backtracks[0].field("home"), Some("A"));
    assert_eq!(backtracks[0].field("away"), Some("B"));
}

#[test]
fn test_rejected_event_names_broken_rule() {
    let teams = vec![team("A", "D1", 100), team("B", "D1", 95), team("C", "D2", 10)];
    let seeded = seed(&teams[..2]);

    let (_, events) = capture_events(|| Matcher::default().find_pairing(&seeded));
    let rejected = events_named(&events, "rejected");
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].field("home"), Some("A"));
    assert_eq!(rejected[0].field("away"), Some("B"));
    assert_eq!(
        rejected[0].field("constraint"),
        Some("matchup/DistinctDivisions")
    );

    let far = vec![&teams[0], &teams[2]];
    let (_, events) = capture_events(|| Matcher::default().find_pairing(&far));
    assert_eq!(
        events_named(&events, "rejected")[0].field("constraint"),
        Some("matchup/CoefficientTolerance")
    );
}
