//! Search scope.
//!
//! A [`SearchScope`] holds the counters of one matcher invocation. It is
//! created per call and never shared, so concurrent searches over
//! disjoint inputs cannot observe each other.

use std::time::{Duration, Instant};

/// Counters for one search.
#[derive(Debug, Clone, Default)]
pub struct SearchScope {
    start_time: Option<Instant>,
    step_count: u64,
    backtrack_count: u64,
    max_depth: usize,
}

impl SearchScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the counters and starts the clock.
    pub fn start_search(&mut self) {
        self.start_time = Some(Instant::now());
        self.step_count = 0;
        self.backtrack_count = 0;
        self.max_depth = 0;
    }

    /// Time since [`start_search`](Self::start_search), if started.
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    /// Number of matchups committed so far, including undone ones.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Records a matchup committed at `depth` (matchups already chosen).
    pub fn record_step(&mut self, depth: usize) {
        self.step_count += 1;
        self.max_depth = self.max_depth.max(depth + 1);
    }

    /// Number of committed matchups that were later undone.
    pub fn backtrack_count(&self) -> u64 {
        self.backtrack_count
    }

    pub fn record_backtrack(&mut self) {
        self.backtrack_count += 1;
    }

    /// Deepest partial pairing reached, in matchups.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> MatchStats {
        MatchStats {
            steps: self.step_count,
            backtracks: self.backtrack_count,
            max_depth: self.max_depth,
            elapsed: self.elapsed().unwrap_or_default(),
        }
    }
}

/// Summary of a finished search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub steps: u64,
    pub backtracks: u64,
    pub max_depth: usize,
    pub elapsed: Duration,
}
