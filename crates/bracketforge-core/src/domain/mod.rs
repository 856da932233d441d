//! Domain model for bracket generation
//!
//! - `Team`: a registrant with a name, a division and a coefficient
//! - `Matchup`: two teams drawn against each other
//! - `Pairing`: a full first round covering every team once

mod matchup;
mod team;

pub use matchup::{Matchup, Pairing};
pub use team::Team;
