//! # Worked Solutions
//!
//! Each solver operation has a matching solution record that keeps the
//! intermediate squares, so a front-end can show *why* the answer holds and
//! not only the answer. Records are computed through a [`TriangleSolver`],
//! so they enforce the same preconditions and raise the same errors.
//!
//! ## Example
//!
//! ```rust
//! use pythag_core::explain::HypotenuseSolution;
//! use pythag_core::solver::TriangleSolver;
//!
//! let solution = HypotenuseSolution::compute(&TriangleSolver::default(), 3.0, 4.0).unwrap();
//! assert_eq!(solution.c, 5.0);
//! assert_eq!(solution.steps(4)[2], "9.0000 + 16.0000 = 25.0000");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::solver::TriangleSolver;

/// Hypotenuse from two legs, with the squares of every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HypotenuseSolution {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub a_squared: f64,
    pub b_squared: f64,
    pub c_squared: f64,
}

impl HypotenuseSolution {
    pub fn compute(solver: &TriangleSolver, a: f64, b: f64) -> CalcResult<Self> {
        let c = solver.solve_hypotenuse(a, b)?;
        Ok(HypotenuseSolution {
            a,
            b,
            c,
            a_squared: a * a,
            b_squared: b * b,
            c_squared: c * c,
        })
    }

    /// One-line answer
    pub fn summary(&self, precision: usize) -> String {
        format!("The hypotenuse c = {:.*}", precision, self.c)
    }

    /// Explanation lines, from the general formula down to the numbers.
    pub fn steps(&self, precision: usize) -> Vec<String> {
        vec![
            "a² + b² = c²".to_string(),
            format!("{}² + {}² = {:.*}²", self.a, self.b, precision, self.c),
            format!(
                "{:.*} + {:.*} = {:.*}",
                precision, self.a_squared, precision, self.b_squared, precision, self.c_squared
            ),
        ]
    }
}

/// Unknown leg from the hypotenuse and the other leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegSolution {
    pub hypotenuse: f64,
    pub known_leg: f64,
    pub unknown_leg: f64,
    pub hypotenuse_squared: f64,
    pub known_leg_squared: f64,
    pub unknown_leg_squared: f64,
}

impl LegSolution {
    pub fn compute(solver: &TriangleSolver, hypotenuse: f64, known_leg: f64) -> CalcResult<Self> {
        let unknown_leg = solver.solve_leg(hypotenuse, known_leg)?;
        Ok(LegSolution {
            hypotenuse,
            known_leg,
            unknown_leg,
            hypotenuse_squared: hypotenuse * hypotenuse,
            known_leg_squared: known_leg * known_leg,
            unknown_leg_squared: unknown_leg * unknown_leg,
        })
    }

    pub fn summary(&self, precision: usize) -> String {
        format!("The unknown side = {:.*}", precision, self.unknown_leg)
    }

    pub fn steps(&self, precision: usize) -> Vec<String> {
        vec![
            "c² - side² = unknown²".to_string(),
            format!(
                "{}² - {}² = {:.*}²",
                self.hypotenuse, self.known_leg, precision, self.unknown_leg
            ),
            format!(
                "{:.*} - {:.*} = {:.*}",
                precision,
                self.hypotenuse_squared,
                precision,
                self.known_leg_squared,
                precision,
                self.unknown_leg_squared
            ),
        ]
    }
}

/// Outcome of checking three sides, sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    /// Sides, smallest first
    pub sides: [f64; 3],
    /// Squares of `sides`, in the same order
    pub squares: [f64; 3],
    /// smallest² + middle² − largest²
    pub residual: f64,
    pub is_right: bool,
}

impl Verification {
    pub fn compute(solver: &TriangleSolver, a: f64, b: f64, c: f64) -> CalcResult<Self> {
        let (residual, is_right) = solver.residual(a, b, c)?;
        let mut sides = [a, b, c];
        sides.sort_by(f64::total_cmp);
        Ok(Verification {
            sides,
            squares: sides.map(|s| s * s),
            residual,
            is_right,
        })
    }

    pub fn summary(&self) -> &'static str {
        if self.is_right {
            "YES! These sides form a right triangle."
        } else {
            "NO. These sides do NOT form a right triangle."
        }
    }

    pub fn steps(&self, precision: usize) -> Vec<String> {
        let relation = if self.is_right { "=" } else { "≠" };
        let [s0, s1, s2] = self.sides;
        let [q0, q1, q2] = self.squares;
        vec![
            format!("{}² + {}² {} {}²", s0, s1, relation, s2),
            format!(
                "{:.*} + {:.*} {} {:.*}",
                precision, q0, precision, q1, relation, precision, q2
            ),
        ]
    }
}

const THEOREM_TEXT: &str = r#"
╔══════════════════════════════════════════════════════════════╗
║           THE PYTHAGOREAN THEOREM                            ║
╚══════════════════════════════════════════════════════════════╝

In a right triangle, the square of the length of the hypotenuse
(the side opposite the right angle) is equal to the sum of the
squares of the lengths of the other two sides.

Formula: a² + b² = c²

Where:
  • a and b are the two shorter sides (legs)
  • c is the longest side (hypotenuse)

Example:
  If a = 3 and b = 4, then:
  c = √(3² + 4²) = √(9 + 16) = √25 = 5

  This forms a 3-4-5 right triangle!
"#;

/// Classroom explanation of the theorem.
pub fn explain_theorem() -> &'static str {
    THEOREM_TEXT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver() -> TriangleSolver {
        TriangleSolver::default()
    }

    #[test]
    fn test_hypotenuse_solution() {
        let solution = HypotenuseSolution::compute(&solver(), 3.0, 4.0).unwrap();
        assert_eq!(solution.c, 5.0);
        assert_eq!(solution.summary(4), "The hypotenuse c = 5.0000");
        let steps = solution.steps(4);
        assert_eq!(steps[0], "a² + b² = c²");
        assert_eq!(steps[1], "3² + 4² = 5.0000²");
        assert_eq!(steps[2], "9.0000 + 16.0000 = 25.0000");
    }

    #[test]
    fn test_hypotenuse_solution_propagates_errors() {
        assert!(HypotenuseSolution::compute(&solver(), 0.0, 4.0).is_err());
    }

    #[test]
    fn test_leg_solution() {
        let solution = LegSolution::compute(&solver(), 10.0, 6.0).unwrap();
        assert_eq!(solution.unknown_leg, 8.0);
        assert_eq!(solution.summary(2), "The unknown side = 8.00");
        assert_eq!(solution.steps(1)[2], "100.0 - 36.0 = 64.0");
        assert!(LegSolution::compute(&solver(), 5.0, 5.0).is_err());
    }

    #[test]
    fn test_verification_right() {
        let v = Verification::compute(&solver(), 13.0, 5.0, 12.0).unwrap();
        assert!(v.is_right);
        assert_eq!(v.sides, [5.0, 12.0, 13.0]);
        assert_eq!(v.squares, [25.0, 144.0, 169.0]);
        assert_eq!(v.residual, 0.0);
        assert_eq!(v.steps(0)[0], "5² + 12² = 13²");
    }

    #[test]
    fn test_verification_not_right() {
        let v = Verification::compute(&solver(), 2.0, 3.0, 4.0).unwrap();
        assert!(!v.is_right);
        assert_eq!(v.residual, -3.0);
        assert!(v.summary().starts_with("NO."));
        assert_eq!(v.steps(0)[1], "4 + 9 ≠ 16");
    }

    #[test]
    fn test_explain_theorem() {
        let text = explain_theorem();
        assert!(text.contains("PYTHAGOREAN"));
        assert!(text.contains("a² + b² = c²"));
    }

    #[test]
    fn test_solution_serialization() {
        let solution = HypotenuseSolution::compute(&solver(), 5.0, 12.0).unwrap();
        let json = serde_json::to_string(&solution).unwrap();
        assert!(json.contains("\"c\":13.0"));
    }
}
