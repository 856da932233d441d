//! Matchups and pairings.

use std::fmt;
use std::ptr;
use std::slice;

use super::Team;

/// A head-to-head matchup between two distinct teams.
///
/// `home` is the team the search picked first (the higher seed still
/// remaining), `away` its partner. The pair is otherwise unordered.
#[derive(Debug, Clone, Copy)]
pub struct Matchup<'a> {
    home: &'a Team,
    away: &'a Team,
}

impl<'a> Matchup<'a> {
    pub fn new(home: &'a Team, away: &'a Team) -> Self {
        Self { home, away }
    }

    pub fn home(&self) -> &'a Team {
        self.home
    }

    pub fn away(&self) -> &'a Team {
        self.away
    }

    /// Both teams in search order.
    pub fn teams(&self) -> [&'a Team; 2] {
        [self.home, self.away]
    }

    /// Returns true if `team` (by identity) takes part in this matchup.
    pub fn contains(&self, team: &Team) -> bool {
        ptr::eq(self.home, team) || ptr::eq(self.away, team)
    }

    /// Returns true if both matchups reference the same two teams.
    pub fn same_teams(&self, other: &Matchup<'_>) -> bool {
        (ptr::eq(self.home, other.home) && ptr::eq(self.away, other.away))
            || (ptr::eq(self.home, other.away) && ptr::eq(self.away, other.home))
    }
}

impl fmt::Display for Matchup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// A complete first round: every team appears in exactly one matchup.
///
/// Matchups keep the order in which the search committed them, which is
/// the order a bracket renderer draws them in.
#[derive(Debug, Clone, Default)]
pub struct Pairing<'a> {
    matchups: Vec<Matchup<'a>>,
}

impl<'a> Pairing<'a> {
    pub fn new(matchups: Vec<Matchup<'a>>) -> Self {
        Self { matchups }
    }

    pub fn matchups(&self) -> &[Matchup<'a>] {
        &self.matchups
    }

    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    /// Number of teams covered by the pairing.
    pub fn team_count(&self) -> usize {
        self.matchups.len() * 2
    }

    pub fn iter(&self) -> slice::Iter<'_, Matchup<'a>> {
        self.matchups.iter()
    }

    /// Returns the matchup `team` plays in, if any.
    pub fn matchup_for(&self, team: &Team) -> Option<&Matchup<'a>> {
        self.matchups.iter().find(|m| m.contains(team))
    }

    /// Returns true if both pairings chose the same matchups, referentially,
    /// in the same order.
    pub fn same_as(&self, other: &Pairing<'_>) -> bool {
        self.len() == other.len()
            && self
                .matchups
                .iter()
                .zip(other.matchups.iter())
                .all(|(a, b)| a.same_teams(b))
    }
}

impl<'a> IntoIterator for Pairing<'a> {
    type Item = Matchup<'a>;
    type IntoIter = std::vec::IntoIter<Matchup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchups.into_iter()
    }
}

impl<'p, 'a> IntoIterator for &'p Pairing<'a> {
    type Item = &'p Matchup<'a>;
    type IntoIter = slice::Iter<'p, Matchup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchups.iter()
    }
}
