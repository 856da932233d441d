//! Builder module for constructing solver components from configuration
//!
//! This module provides the wiring between configuration types and
//! the matcher.

use bracketforge_config::{BracketConfig, TerminationConfig};
use tracing::debug;

use crate::termination::{OrTermination, StepCountTermination, Termination, TimeTermination};

/// Builder for constructing search guards from configuration.
pub struct TerminationBuilder;

impl TerminationBuilder {
    /// Builds the guard described by `config`, or `None` if it sets no
    /// limit.
    pub fn build(config: &TerminationConfig) -> Option<Box<dyn Termination>> {
        let steps = config.step_count_limit.map(StepCountTermination::new);
        let time = config.time_limit().map(TimeTermination::new);

        match (steps, time) {
            (Some(steps), Some(time)) => {
                debug!(
                    step_count_limit = steps.limit(),
                    time_limit_ms = config.time_limit().map_or(0, |t| t.as_millis() as u64),
                    "Search bounded by steps and time"
                );
                Some(Box::new(OrTermination::new((steps, time))))
            }
            (Some(steps), None) => Some(Box::new(steps)),
            (None, Some(time)) => Some(Box::new(time)),
            (None, None) => None,
        }
    }

    /// Builds the guard for a whole bracket configuration.
    pub fn from_bracket_config(config: &BracketConfig) -> Option<Box<dyn Termination>> {
        config.termination.as_ref().and_then(Self::build)
    }
}
