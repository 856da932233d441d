//! The team entity.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{BracketError, Result};

/// A registered team.
///
/// Teams are immutable once constructed. The matcher only ever holds
/// references to teams owned by the caller, so the address of a `Team`
/// is its identity for the lifetime of a search.
///
/// # Example
///
/// ```
/// use bracketforge_core::Team;
///
/// let team = Team::new(" Team A ", "Division 1", 10).unwrap();
/// assert_eq!(team.name(), "Team A");
/// assert_eq!(team.to_string(), "Team A (Div: Division 1, Coef: 10)");
///
/// assert!(Team::new("", "Division 1", 10).is_err());
/// assert!(Team::new("Team A", "Division 1", 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team {
    name: String,
    division: String,
    coefficient: u32,
}

impl Team {
    /// Creates a team, trimming surrounding whitespace from the text fields.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::InvalidTeam`] if the name or division is
    /// empty after trimming, or if the coefficient is zero.
    pub fn new(name: impl AsRef<str>, division: impl AsRef<str>, coefficient: u32) -> Result<Self> {
        let name = name.as_ref().trim();
        let division = division.as_ref().trim();

        if name.is_empty() {
            return Err(BracketError::InvalidTeam("team name is required".into()));
        }
        if division.is_empty() {
            return Err(BracketError::InvalidTeam(format!(
                "division is required for team '{}'",
                name
            )));
        }
        if coefficient == 0 {
            return Err(BracketError::InvalidTeam(format!(
                "coefficient for team '{}' must be positive",
                name
            )));
        }

        Ok(Self {
            name: name.to_string(),
            division: division.to_string(),
            coefficient,
        })
    }

    /// Builds a team from raw text fields, as entered in a form or an
    /// import row.
    pub fn parse(name: &str, division: &str, coefficient: &str) -> Result<Self> {
        let coefficient = Self::parse_coefficient(coefficient)?;
        Self::new(name, division, coefficient)
    }

    /// Parses a coefficient from text.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::InvalidTeam`] if the text is not an integer
    /// or is not positive.
    pub fn parse_coefficient(text: &str) -> Result<u32> {
        let text = text.trim();
        let value: i64 = text.parse().map_err(|_| {
            BracketError::InvalidTeam(format!("coefficient '{}' must be an integer", text))
        })?;
        if value <= 0 {
            return Err(BracketError::InvalidTeam(format!(
                "coefficient {} must be positive",
                value
            )));
        }
        u32::try_from(value).map_err(|_| {
            BracketError::InvalidTeam(format!("coefficient {} is too large", value))
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn division(&self) -> &str {
        &self.division
    }

    pub fn coefficient(&self) -> u32 {
        self.coefficient
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Div: {}, Coef: {})",
            self.name, self.division, self.coefficient
        )
    }
}
