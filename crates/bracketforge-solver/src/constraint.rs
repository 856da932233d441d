//! Hard constraints a matchup must satisfy.
//!
//! Every candidate pair is checked against a [`MatchupConstraint`] before
//! the matcher commits to it. The default [`ValidityConstraint`] requires
//! distinct divisions and a coefficient gap within the tolerance.

use std::fmt::Debug;

use bracketforge_core::{ConstraintRef, Team};

/// Default maximum coefficient gap within a matchup.
pub use bracketforge_config::DEFAULT_TOLERANCE;

/// A hard constraint on a candidate matchup.
///
/// Implementations must be symmetric: `is_satisfied(a, b)` equals
/// `is_satisfied(b, a)`.
pub trait MatchupConstraint: Send + Sync + Debug {
    /// Identifies the constraint in logs.
    fn constraint_ref(&self) -> ConstraintRef;

    /// Returns true if `home` and `away` may be drawn against each other.
    fn is_satisfied(&self, home: &Team, away: &Team) -> bool;

    /// Returns the rule a pair breaks, if any. Composite constraints
    /// report the first broken part.
    fn violation(&self, home: &Team, away: &Team) -> Option<ConstraintRef> {
        (!self.is_satisfied(home, away)).then(|| self.constraint_ref())
    }
}

/// Teams from the same division may never meet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistinctDivisions;

impl MatchupConstraint for DistinctDivisions {
    fn constraint_ref(&self) -> ConstraintRef {
        ConstraintRef::matchup("DistinctDivisions")
    }

    fn is_satisfied(&self, home: &Team, away: &Team) -> bool {
        home.division() != away.division()
    }
}

/// Paired coefficients may differ by at most `tolerance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoefficientTolerance {
    tolerance: u32,
}

impl CoefficientTolerance {
    pub fn new(tolerance: u32) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }
}

impl Default for CoefficientTolerance {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl MatchupConstraint for CoefficientTolerance {
    fn constraint_ref(&self) -> ConstraintRef {
        ConstraintRef::matchup("CoefficientTolerance")
    }

    fn is_satisfied(&self, home: &Team, away: &Team) -> bool {
        home.coefficient().abs_diff(away.coefficient()) <= self.tolerance
    }
}

/// Both matchup rules together.
///
/// # Example
///
/// ```
/// use bracketforge_core::Team;
/// use bracketforge_solver::{MatchupConstraint, ValidityConstraint};
///
/// let a = Team::new("A", "D1", 40).unwrap();
/// let b = Team::new("B", "D2", 20).unwrap();
/// let c = Team::new("C", "D1", 35).unwrap();
///
/// let rule = ValidityConstraint::new(20);
/// assert!(rule.is_satisfied(&a, &b));
/// assert!(!rule.is_satisfied(&a, &c)); // same division
/// assert!(!ValidityConstraint::new(19).is_satisfied(&a, &b)); // gap of 20
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityConstraint {
    divisions: DistinctDivisions,
    coefficients: CoefficientTolerance,
}

impl ValidityConstraint {
    pub fn new(tolerance: u32) -> Self {
        Self {
            divisions: DistinctDivisions,
            coefficients: CoefficientTolerance::new(tolerance),
        }
    }

    pub fn tolerance(&self) -> u32 {
        self.coefficients.tolerance()
    }
}

impl MatchupConstraint for ValidityConstraint {
    fn constraint_ref(&self) -> ConstraintRef {
        ConstraintRef::matchup("Validity")
    }

    fn is_satisfied(&self, home: &Team, away: &Team) -> bool {
        self.divisions.is_satisfied(home, away) && self.coefficients.is_satisfied(home, away)
    }

    fn violation(&self, home: &Team, away: &Team) -> Option<ConstraintRef> {
        self.divisions
            .violation(home, away)
            .or_else(|| self.coefficients.violation(home, away))
    }
}
