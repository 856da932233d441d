//! Configuration system for BracketForge.
//!
//! Load bracket configuration from TOML or YAML files to control the
//! coefficient tolerance, the roster policy and search limits without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use bracketforge_config::BracketConfig;
//! use std::time::Duration;
//!
//! let config = BracketConfig::from_toml_str(r#"
//!     tolerance = 15
//!
//!     [roster]
//!     require_power_of_two = false
//!
//!     [termination]
//!     seconds_spent_limit = 5
//! "#).unwrap();
//!
//! assert_eq!(config.tolerance, 15);
//! assert!(!config.roster.require_power_of_two);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use bracketforge_config::BracketConfig;
//!
//! let config = BracketConfig::load("bracket.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use bracketforge_core::{RosterPolicy, MIN_TEAMS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum coefficient gap within a matchup.
pub const DEFAULT_TOLERANCE: u32 = 20;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main bracket configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BracketConfig {
    /// Maximum coefficient difference allowed within a matchup.
    #[serde(default = "default_tolerance")]
    pub tolerance: u32,

    /// Field-size rules checked before matching.
    #[serde(default)]
    pub roster: RosterConfig,

    /// Search limits. Unlimited when absent.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

fn default_tolerance() -> u32 {
    DEFAULT_TOLERANCE
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            roster: RosterConfig::default(),
            termination: None,
        }
    }
}

impl BracketConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster.min_teams < MIN_TEAMS {
            return Err(ConfigError::Invalid(format!(
                "roster.min_teams must be at least {}, got {}",
                MIN_TEAMS, self.roster.min_teams
            )));
        }
        Ok(())
    }

    /// Sets the coefficient tolerance.
    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the step count limit.
    pub fn with_step_limit(mut self, steps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            step_count_limit: Some(steps),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the search time limit.
    pub fn with_time_limit_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Accepts any even field instead of requiring a power of two.
    pub fn allow_any_even_count(mut self) -> Self {
        self.roster.require_power_of_two = false;
        self
    }

    /// Returns the roster policy to validate fields with.
    pub fn roster_policy(&self) -> RosterPolicy {
        self.roster.policy()
    }

    /// Returns the search time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the search step limit, if configured.
    pub fn step_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.step_count_limit)
    }
}

/// Roster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RosterConfig {
    /// Minimum number of teams.
    #[serde(default = "default_min_teams")]
    pub min_teams: usize,

    /// Whether the number of teams must be a power of two.
    #[serde(default = "default_require_power_of_two")]
    pub require_power_of_two: bool,
}

fn default_min_teams() -> usize {
    MIN_TEAMS
}

fn default_require_power_of_two() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            min_teams: default_min_teams(),
            require_power_of_two: default_require_power_of_two(),
        }
    }
}

impl RosterConfig {
    pub fn policy(&self) -> RosterPolicy {
        RosterPolicy {
            min_teams: self.min_teams,
            require_power_of_two: self.require_power_of_two,
        }
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend searching.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of search steps.
    pub step_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    ///
    /// Seconds and milliseconds add up, saturating at `Duration::MAX`.
    pub fn time_limit(&self) -> Option<Duration> {
        let limit = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0))
            .saturating_add(Duration::from_millis(self.millis_spent_limit.unwrap_or(0)));
        (!limit.is_zero()).then_some(limit)
    }
}
