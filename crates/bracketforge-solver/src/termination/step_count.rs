//! Step count termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates after a number of committed matchups.
///
/// # Example
///
/// ```
/// use bracketforge_solver::termination::StepCountTermination;
///
/// // Give up after 100,000 tentative matchups
/// let term = StepCountTermination::new(100_000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.step_count() >= self.limit
    }
}
