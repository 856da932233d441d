//! Shared test fixtures for BracketForge crates.
//!
//! This crate provides team builders, canned fields and pairing checks.
//! It depends only on `bracketforge-core` so every other crate can use it
//! as a dev-dependency.
//!
//! - [`fields`] - Team builders and canned fields
//! - [`assertions`] - Pairing checks
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! bracketforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use bracketforge_test::{assert_valid_pairing, scale_field, team};
//! ```

pub mod assertions;
pub mod fields;

pub use assertions::assert_valid_pairing;
pub use fields::{scale_field, single_division_field, team};
