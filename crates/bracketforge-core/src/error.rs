//! Error types for BracketForge

use thiserror::Error;

/// Main error type for BracketForge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    /// A team failed field validation (empty text, bad coefficient).
    #[error("Invalid team: {0}")]
    InvalidTeam(String),

    /// The field size cannot be bracketed under the roster policy.
    #[error("Invalid number of teams ({count}): {reason}")]
    InvalidEntityCount { count: usize, reason: String },

    /// The search exhausted every candidate without completing a pairing.
    #[error("No valid tournament bracket can be generated with the given constraints.")]
    NoFeasiblePairing,

    /// A bulk-import row failed field-count or field-content validation.
    #[error("Malformed import row at line {line}: {reason}")]
    MalformedImportRow { line: u64, reason: String },

    /// A host search guard stopped the matcher before it finished.
    #[error("No valid tournament bracket was found within the search limit ({steps} steps).")]
    SearchLimitExceeded { steps: u64 },

    /// The import source could not be read.
    #[error("Import error: {0}")]
    Import(String),
}

impl BracketError {
    /// Builds an [`BracketError::InvalidEntityCount`] for `count` teams.
    pub fn invalid_count(count: usize, reason: impl Into<String>) -> Self {
        Self::InvalidEntityCount {
            count,
            reason: reason.into(),
        }
    }

    /// Returns true if the error means no bracket could be produced for a
    /// well-formed field.
    ///
    /// Hosts report a tripped search guard the same way as a proven
    /// infeasible field.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            Self::NoFeasiblePairing | Self::SearchLimitExceeded { .. }
        )
    }
}

/// Result type alias for BracketForge operations
pub type Result<T> = std::result::Result<T, BracketError>;
