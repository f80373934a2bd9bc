//! # Pythagorean Formulas
//!
//! Raw formulas with no validation. The solver checks preconditions before
//! calling these; use [`crate::solver`] unless the inputs are already known
//! to be valid.
//!
//! ## Notation
//!
//! ```text
//!          /|
//!       c / |
//!        /  | b
//!       /___|
//!         a
//! ```
//!
//! - `a`, `b` = Legs
//! - `c` = Hypotenuse

/// c = √(a² + b²)
///
/// Squares directly while both squares and their sum are normal f64, so integer triples come
/// out exact. Falls back to [`f64::hypot`] when the squares would overflow
/// or underflow.
#[inline]
pub fn hypotenuse_from_legs(a: f64, b: f64) -> f64 {
    let (a2, b2) = (a * a, b * b);
    if a2.is_normal() && b2.is_normal() && (a2 + b2).is_finite() {
        (a2 + b2).sqrt()
    } else {
        a.hypot(b)
    }
}

/// other = √((c − leg)(c + leg))
///
/// The factored form avoids `inf − inf` for large sides. When the product
/// leaves the normal range the sides are scaled by `c` first.
#[inline]
pub fn leg_from_hypotenuse(c: f64, leg: f64) -> f64 {
    let product = (c - leg) * (c + leg);
    if product.is_normal() {
        product.sqrt()
    } else {
        let r = leg / c;
        c * ((1.0 - r) * (1.0 + r)).sqrt()
    }
}

/// smallest² + middle² − largest², for sides already sorted ascending.
///
/// Zero exactly when the sides satisfy the converse of the theorem.
#[inline]
pub fn pythagorean_residual(smallest: f64, middle: f64, largest: f64) -> f64 {
    smallest * smallest + middle * middle - largest * largest
}
