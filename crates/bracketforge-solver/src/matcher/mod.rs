//! Backtracking matchup search with forward checking.
//!
//! The matcher builds a first round one matchup at a time:
//!
//! 1. The first remaining team in seeded order is the home side.
//! 2. Every other remaining team, in seeded order, is tried as its
//!    opponent. Pairs that break the constraint are skipped.
//! 3. The first valid pair is committed and both teams leave the
//!    remaining set for all deeper levels (forward checking).
//! 4. If the deeper levels cannot finish, the pair is undone and the next
//!    opponent is tried. If none finishes, the level fails.
//!
//! The first complete pairing under this fixed order is returned, so the
//! result depends only on the seeded order and the constraint.
//!
//! Teams are identified by their position in the seeded slice. The search
//! is iterative: one frame per open matchup on an explicit stack, over a
//! shared `used` table, so depth is bounded by the heap rather than the
//! call stack. All of it is owned by one call, together with the
//! [`SearchScope`].

use std::fmt;

use bracketforge_core::{BracketError, Matchup, Pairing, Result, Team};
use smallvec::SmallVec;
use tracing::{trace, Level};

use crate::constraint::{MatchupConstraint, ValidityConstraint};
use crate::scope::SearchScope;
use crate::termination::Termination;

/// One open matchup: the home seed and the next opponent seed to try.
#[derive(Debug, Clone, Copy)]
struct Frame {
    home: usize,
    cursor: usize,
}

/// Open matchups, innermost last. Fields of up to 64 teams stay inline.
type FrameStack = SmallVec<[Frame; 32]>;

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchOutcome {
    /// Every team was matched.
    Complete,
    /// No opponent for the first home team leads to a complete pairing.
    Exhausted,
    /// A host guard stopped the search.
    Terminated,
}

/// Finds a perfect pairing of a seeded field.
///
/// # Example
///
/// ```
/// use bracketforge_core::Team;
/// use bracketforge_solver::{seed, Matcher};
///
/// let teams = vec![
///     Team::new("Team A", "Division 1", 10).unwrap(),
///     Team::new("Team B", "Division 2", 15).unwrap(),
///     Team::new("Team C", "Division 3", 20).unwrap(),
///     Team::new("Team D", "Division 4", 25).unwrap(),
/// ];
///
/// let seeded = seed(&teams);
/// let pairing = Matcher::with_tolerance(20).find_pairing(&seeded).unwrap();
/// assert_eq!(pairing.len(), 2);
/// assert_eq!(pairing.matchups()[0].home().name(), "Team D");
/// assert_eq!(pairing.matchups()[0].away().name(), "Team C");
/// ```
pub struct Matcher<C = ValidityConstraint> {
    constraint: C,
    termination: Option<Box<dyn Termination>>,
}

impl<C: fmt::Debug> fmt::Debug for Matcher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("constraint", &self.constraint)
            .field("termination", &self.termination)
            .finish()
    }
}

impl Matcher<ValidityConstraint> {
    /// Creates a matcher using the default division and tolerance rules.
    pub fn with_tolerance(tolerance: u32) -> Self {
        Self::new(ValidityConstraint::new(tolerance))
    }
}

impl Default for Matcher<ValidityConstraint> {
    fn default() -> Self {
        Self::new(ValidityConstraint::default())
    }
}

impl<C: MatchupConstraint> Matcher<C> {
    /// Creates an unbounded matcher for `constraint`.
    pub fn new(constraint: C) -> Self {
        Self {
            constraint,
            termination: None,
        }
    }

    /// Attaches a host guard that bounds the search.
    pub fn with_termination(mut self, termination: impl Termination + 'static) -> Self {
        self.termination = Some(Box::new(termination));
        self
    }

    /// Attaches an already boxed guard, or removes it with `None`.
    pub fn with_boxed_termination(mut self, termination: Option<Box<dyn Termination>>) -> Self {
        self.termination = termination;
        self
    }

    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Finds the first feasible pairing of `seeded`.
    ///
    /// # Errors
    ///
    /// - [`BracketError::InvalidEntityCount`] if `seeded` is empty or odd.
    /// - [`BracketError::NoFeasiblePairing`] if no pairing satisfies the
    ///   constraint.
    /// - [`BracketError::SearchLimitExceeded`] if the guard tripped first.
    pub fn find_pairing<'a>(&self, seeded: &[&'a Team]) -> Result<Pairing<'a>> {
        let mut scope = SearchScope::new();
        self.find_pairing_in_scope(seeded, &mut scope)
    }

    /// Like [`find_pairing`](Self::find_pairing), recording counters in a
    /// caller-supplied scope.
    pub fn find_pairing_in_scope<'a>(
        &self,
        seeded: &[&'a Team],
        scope: &mut SearchScope,
    ) -> Result<Pairing<'a>> {
        let count = seeded.len();
        if count == 0 || count % 2 != 0 {
            return Err(BracketError::invalid_count(
                count,
                "matching needs a non-empty, even number of teams",
            ));
        }

        scope.start_search();
        let mut chosen: Vec<(usize, usize)> = Vec::with_capacity(count / 2);

        match self.search(seeded, &mut chosen, scope) {
            SearchOutcome::Complete => Ok(Pairing::new(
                chosen
                    .into_iter()
                    .map(|(home, away)| Matchup::new(seeded[home], seeded[away]))
                    .collect(),
            )),
            SearchOutcome::Exhausted => Err(BracketError::NoFeasiblePairing),
            SearchOutcome::Terminated => Err(BracketError::SearchLimitExceeded {
                steps: scope.step_count(),
            }),
        }
    }

    /// Depth-first search in seeded order.
    ///
    /// Invariant: every seed before the innermost frame's home is used, so
    /// the first unused seed after it is the next home, and unused seeds
    /// from its cursor onwards are its remaining opponents in seeded order.
    fn search(
        &self,
        seeded: &[&Team],
        chosen: &mut Vec<(usize, usize)>,
        scope: &mut SearchScope,
    ) -> SearchOutcome {
        let count = seeded.len();
        let mut used = vec![false; count];
        let mut frames = FrameStack::new();

        used[0] = true;
        frames.push(Frame { home: 0, cursor: 1 });

        loop {
            let Some(frame) = frames.last_mut() else {
                return SearchOutcome::Exhausted;
            };
            let home = frame.home;

            match self.next_opponent(seeded, &used, frame) {
                Some(away) => {
                    if self.is_terminated(scope) {
                        return SearchOutcome::Terminated;
                    }

                    scope.record_step(chosen.len());
                    chosen.push((home, away));
                    used[away] = true;

                    match (home + 1..count).find(|&i| !used[i]) {
                        Some(next) => {
                            used[next] = true;
                            frames.push(Frame {
                                home: next,
                                cursor: next + 1,
                            });
                        }
                        None => return SearchOutcome::Complete,
                    }
                }
                None => {
                    used[home] = false;
                    frames.pop();

                    // Undo the parent's matchup; it resumes at its cursor.
                    if let Some((parent_home, parent_away)) = chosen.pop() {
                        used[parent_away] = false;
                        scope.record_backtrack();
                        trace!(
                            event = "backtrack",
                            depth = chosen.len() as u64,
                            home = seeded[parent_home].name(),
                            away = seeded[parent_away].name(),
                        );
                    }
                }
            }
        }
    }

    /// Advances `frame` past the next valid unused opponent and returns it.
    fn next_opponent(&self, seeded: &[&Team], used: &[bool], frame: &mut Frame) -> Option<usize> {
        let home = seeded[frame.home];
        while frame.cursor < seeded.len() {
            let away = frame.cursor;
            frame.cursor += 1;
            if used[away] {
                continue;
            }
            if self.constraint.is_satisfied(home, seeded[away]) {
                return Some(away);
            }
            if tracing::enabled!(Level::TRACE) {
                if let Some(rule) = self.constraint.violation(home, seeded[away]) {
                    trace!(
                        event = "rejected",
                        home = home.name(),
                        away = seeded[away].name(),
                        constraint = rule.full_name().as_str(),
                    );
                }
            }
        }
        None
    }

    fn is_terminated(&self, scope: &SearchScope) -> bool {
        self.termination
            .as_ref()
            .is_some_and(|t| t.is_terminated(scope))
    }
}

/// Returns the teams that have no valid opponent anywhere in the field.
///
/// Any such team makes the field infeasible. Hosts use this to explain a
/// [`BracketError::NoFeasiblePairing`] to the user.
pub fn unmatchable_teams<'a, C: MatchupConstraint>(
    teams: &[&'a Team],
    constraint: &C,
) -> Vec<&'a Team> {
    teams
        .iter()
        .enumerate()
        .filter(|&(i, team)| {
            !teams
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && constraint.is_satisfied(team, other))
        })
        .map(|(_, &team)| team)
        .collect()
}

#[cfg(test)]
mod tests;
