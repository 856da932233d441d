//! BracketForge Core - Core types for bracket generation
//!
//! This crate provides the fundamental types for BracketForge:
//! - Teams, matchups and pairings
//! - Field-size validation (roster policy)
//! - Constraint identification
//! - The shared error type

pub mod constraint;
pub mod domain;
pub mod error;
pub mod roster;

pub use constraint::ConstraintRef;
pub use domain::{Matchup, Pairing, Team};
pub use error::{BracketError, Result};
pub use roster::{validate_roster, RosterPolicy, MIN_TEAMS};
