//! # Triangle
//!
//! The one data entity of the crate: three side lengths. A `Triangle` is a
//! plain value; it has no identity and is never persisted.
//!
//! ## JSON Example
//!
//! ```json
//! { "a": 3.0, "b": 4.0, "c": 5.0 }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Side lengths of a triangle. When built from legs, `c` is the hypotenuse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First leg
    pub a: f64,
    /// Second leg
    pub b: f64,
    /// Hypotenuse (longest side)
    pub c: f64,
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Triangle { a, b, c }
    }

    /// Sides sorted ascending; the last entry is the candidate hypotenuse.
    pub fn sides_ascending(&self) -> [f64; 3] {
        let mut sides = [self.a, self.b, self.c];
        sides.sort_by(f64::total_cmp);
        sides
    }

    /// Longest side
    pub fn longest(&self) -> f64 {
        self.sides_ascending()[2]
    }

    /// Perimeter a + b + c
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Area of the right triangle with legs `a` and `b`
    pub fn right_area(&self) -> f64 {
        0.5 * self.a * self.b
    }

    /// Check that every side is a usable length.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("a", self.a)?;
        require_positive("b", self.b)?;
        require_positive("c", self.c)?;
        Ok(())
    }
}

/// Reject zero, negative, NaN and infinite side lengths.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Sides must be finite numbers",
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Sides must be positive numbers",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_ascending() {
        let tri = Triangle::new(5.0, 3.0, 4.0);
        assert_eq!(tri.sides_ascending(), [3.0, 4.0, 5.0]);
        assert_eq!(tri.longest(), 5.0);
    }

    #[test]
    fn test_perimeter_and_area() {
        let tri = Triangle::new(3.0, 4.0, 5.0);
        assert_eq!(tri.perimeter(), 12.0);
        assert_eq!(tri.right_area(), 6.0);
    }

    #[test]
    fn test_validate() {
        assert!(Triangle::new(3.0, 4.0, 5.0).validate().is_ok());
        assert!(Triangle::new(0.0, 4.0, 5.0).validate().is_err());
        assert!(Triangle::new(3.0, -4.0, 5.0).validate().is_err());
        assert!(Triangle::new(3.0, 4.0, f64::NAN).validate().is_err());
        assert!(Triangle::new(f64::INFINITY, 4.0, 5.0).validate().is_err());
    }

    #[test]
    fn test_validate_names_field() {
        match Triangle::new(3.0, 4.0, -5.0).validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "c"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_serialization() {
        let tri = Triangle::new(5.0, 12.0, 13.0);
        let json = serde_json::to_string(&tri).unwrap();
        assert_eq!(json, r#"{"a":5.0,"b":12.0,"c":13.0}"#);
    }
}
