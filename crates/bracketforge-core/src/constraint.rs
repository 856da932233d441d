//! Constraint identification.
//!
//! Matchup constraints are identified by a [`ConstraintRef`] so that
//! rejected candidates can be reported by name in trace output.

use std::fmt;

/// Package name shared by the built-in matchup constraints.
pub const MATCHUP_PACKAGE: &str = "matchup";

/// Reference to a constraint for identification.
///
/// # Example
///
/// ```
/// use bracketforge_core::ConstraintRef;
///
/// let cr = ConstraintRef::new("matchup", "DistinctDivisions");
/// assert_eq!(cr.full_name(), "matchup/DistinctDivisions");
///
/// let simple = ConstraintRef::new("", "Simple");
/// assert_eq!(simple.full_name(), "Simple");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintRef {
    /// Package/module containing the constraint.
    pub package: String,
    /// Name of the constraint.
    pub name: String,
}

impl ConstraintRef {
    /// Creates a new constraint reference.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Creates a reference in the built-in matchup package.
    pub fn matchup(name: impl Into<String>) -> Self {
        Self::new(MATCHUP_PACKAGE, name)
    }

    /// Returns the fully qualified name.
    pub fn full_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.package, self.name)
        }
    }
}

impl fmt::Display for ConstraintRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}
