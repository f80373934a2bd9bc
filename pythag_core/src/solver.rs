//! # Triangle Solver
//!
//! The three operations of the calculator:
//!
//! - [`solve_hypotenuse`] - c from legs a and b
//! - [`solve_leg`] - the unknown leg from the hypotenuse and one leg
//! - [`is_right_triangle`] - whether three sides satisfy a² + b² = c²
//!
//! Every call is pure: it validates its arguments, evaluates a closed-form
//! formula and returns. The free functions use [`SolverSettings::default`];
//! build a [`TriangleSolver`] to use a different tolerance.
//!
//! ## Example
//!
//! ```rust
//! use pythag_core::solver::{solve_hypotenuse, solve_leg, is_right_triangle};
//!
//! assert_eq!(solve_hypotenuse(3.0, 4.0).unwrap(), 5.0);
//! assert_eq!(solve_leg(5.0, 3.0).unwrap(), 4.0);
//! assert!(is_right_triangle(5.0, 3.0, 4.0).unwrap());
//! assert!(solve_leg(5.0, 6.0).is_err());
//! ```

use crate::equations::{hypotenuse_from_legs, leg_from_hypotenuse, pythagorean_residual};
use crate::errors::{CalcError, CalcResult};
use crate::settings::SolverSettings;
use crate::triangle::{require_positive, Triangle};

/// Solver carrying the settings that affect its answers.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TriangleSolver {
    settings: SolverSettings,
}

impl TriangleSolver {
    /// Create a solver with validated settings.
    pub fn new(settings: SolverSettings) -> CalcResult<Self> {
        settings.validate()?;
        Ok(TriangleSolver { settings })
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Calculate the hypotenuse c = √(a² + b²).
    ///
    /// # Errors
    ///
    /// `InvalidInput` if either leg is not a positive finite number, or if
    /// the hypotenuse is larger than `f64::MAX`.
    pub fn solve_hypotenuse(&self, a: f64, b: f64) -> CalcResult<f64> {
        require_positive("a", a)?;
        require_positive("b", b)?;

        let c = hypotenuse_from_legs(a, b);
        if !c.is_finite() {
            return Err(CalcError::invalid_input(
                "c",
                c.to_string(),
                format!("The hypotenuse of legs {} and {} exceeds the f64 range", a, b),
            ));
        }
        tracing::debug!(a, b, c, "solved hypotenuse");
        Ok(c)
    }

    /// Calculate the unknown leg √(c² − known_leg²).
    ///
    /// # Errors
    ///
    /// `InvalidInput` if either value is not positive, or if `known_leg >= c`
    /// (a leg can never be as long as the hypotenuse). Also `InvalidInput`
    /// when the answer is too small to represent.
    pub fn solve_leg(&self, c: f64, known_leg: f64) -> CalcResult<f64> {
        require_positive("c", c)?;
        require_positive("known_leg", known_leg)?;
        if known_leg >= c {
            return Err(CalcError::invalid_input(
                "known_leg",
                known_leg.to_string(),
                format!("The hypotenuse ({}) must be the longest side", c),
            ));
        }

        let leg = leg_from_hypotenuse(c, known_leg);
        if !leg.is_normal() {
            return Err(CalcError::invalid_input(
                "leg",
                leg.to_string(),
                format!("The unknown side for c = {} and {} is below the f64 range", c, known_leg),
            ));
        }
        tracing::debug!(c, known_leg, leg, "solved leg");
        Ok(leg)
    }

    /// Check whether three sides, in any order, form a right triangle.
    ///
    /// The largest side is taken as the candidate hypotenuse and the residual
    /// `smallest² + middle² − largest²` is compared with the tolerance.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if a side is not positive, or if a side's square
    /// overflows or underflows f64 (roughly outside `1.5e-154..1.3e154`).
    pub fn is_right_triangle(&self, a: f64, b: f64, c: f64) -> CalcResult<bool> {
        Ok(self.residual(a, b, c)?.1)
    }

    /// Like [`Self::is_right_triangle`] but also returns the residual.
    pub fn residual(&self, a: f64, b: f64, c: f64) -> CalcResult<(f64, bool)> {
        let triangle = Triangle::new(a, b, c);
        triangle.validate()?;

        let [small, middle, large] = triangle.sides_ascending();
        for side in [small, large] {
            require_squarable(side)?;
        }
        let residual = pythagorean_residual(small, middle, large);
        if !residual.is_finite() {
            return Err(CalcError::invalid_input(
                "sides",
                format!("({}, {}, {})", a, b, c),
                "The sum of squares exceeds the f64 range",
            ));
        }
        let is_right = self.settings.tolerance.accepts(residual, large);
        tracing::trace!(
            residual,
            bound = self.settings.tolerance.bound(large),
            "tolerance comparison"
        );
        tracing::debug!(a, b, c, is_right, "verified triangle");
        Ok((residual, is_right))
    }

    /// Complete a right triangle from its two legs.
    pub fn triangle_from_legs(&self, a: f64, b: f64) -> CalcResult<Triangle> {
        let c = self.solve_hypotenuse(a, b)?;
        Ok(Triangle::new(a, b, c))
    }
}

/// The square of `side` must be a normal f64 for the residual to mean anything.
fn require_squarable(side: f64) -> CalcResult<()> {
    if (side * side).is_normal() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            "sides",
            side.to_string(),
            "Side is too large or too small to square in double precision",
        ))
    }
}

/// [`TriangleSolver::solve_hypotenuse`] with default settings.
pub fn solve_hypotenuse(a: f64, b: f64) -> CalcResult<f64> {
    TriangleSolver::default().solve_hypotenuse(a, b)
}

/// [`TriangleSolver::solve_leg`] with default settings.
pub fn solve_leg(c: f64, known_leg: f64) -> CalcResult<f64> {
    TriangleSolver::default().solve_leg(c, known_leg)
}

/// [`TriangleSolver::is_right_triangle`] with default settings.
pub fn is_right_triangle(a: f64, b: f64, c: f64) -> CalcResult<bool> {
    TriangleSolver::default().is_right_triangle(a, b, c)
}
