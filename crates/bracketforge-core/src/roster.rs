//! Field-size validation.
//!
//! The matcher only needs an even number of teams. A knockout bracket also
//! needs every later round to pair up evenly, which is why the default
//! policy asks for a power of two.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::domain::Team;
use crate::error::{BracketError, Result};

/// Smallest field that can be paired.
pub const MIN_TEAMS: usize = 2;

/// Rules a field must satisfy before matching is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RosterPolicy {
    /// Minimum number of teams.
    pub min_teams: usize,
    /// Whether the field size must be a power of two.
    pub require_power_of_two: bool,
}

impl Default for RosterPolicy {
    fn default() -> Self {
        Self {
            min_teams: MIN_TEAMS,
            require_power_of_two: true,
        }
    }
}

impl RosterPolicy {
    /// A policy that accepts any even field of at least two teams.
    pub fn any_even() -> Self {
        Self {
            min_teams: MIN_TEAMS,
            require_power_of_two: false,
        }
    }

    /// Checks a field size against this policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bracketforge_core::RosterPolicy;
    ///
    /// let policy = RosterPolicy::default();
    /// assert!(policy.check_count(8).is_ok());
    /// assert!(policy.check_count(6).is_err());
    /// assert!(RosterPolicy::any_even().check_count(6).is_ok());
    /// ```
    pub fn check_count(&self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(BracketError::invalid_count(count, "no teams have been added"));
        }
        let min = self.min_teams.max(MIN_TEAMS);
        if count < min {
            return Err(BracketError::invalid_count(
                count,
                format!("you need at least {} teams to generate a bracket", min),
            ));
        }
        if count % 2 != 0 {
            return Err(BracketError::invalid_count(
                count,
                "you need an even number of teams to generate a bracket",
            ));
        }
        if self.require_power_of_two && !count.is_power_of_two() {
            return Err(BracketError::invalid_count(
                count,
                "number of teams must be a power of 2 (e.g., 2, 4, 8, 16)",
            ));
        }
        Ok(())
    }
}

/// Validates a field of teams against `policy`.
pub fn validate_roster(teams: &[Team], policy: &RosterPolicy) -> Result<()> {
    policy.check_count(teams.len())
}
