//! # Pythagorean Triples
//!
//! Integer right triangles. [`COMMON_TRIPLES`] is the classroom list;
//! [`primitive_triples`] enumerates every primitive triple up to a bound with
//! Euclid's formula. The bound is capped at [`MAX_TRIPLE_BOUND`].
//!
//! ## Example
//!
//! ```rust
//! use pythag_core::triples::{primitive_triples, Triple};
//!
//! let triples = primitive_triples(30).unwrap();
//! assert_eq!(triples[0], Triple::new(3, 4, 5));
//! assert!(triples.iter().all(|t| t.is_primitive()));
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::triangle::Triangle;

/// Largest hypotenuse bound [`primitive_triples`] accepts (about 160k triples).
pub const MAX_TRIPLE_BOUND: u64 = 1_000_000;

/// Integer side lengths (a, b, c) with c the hypotenuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl Triple {
    pub const fn new(a: u64, b: u64, c: u64) -> Self {
        Triple { a, b, c }
    }

    /// Exact integer check of a² + b² = c² (no tolerance needed).
    pub fn is_valid(&self) -> bool {
        if self.a == 0 || self.b == 0 {
            return false;
        }
        let sum = (self.a as u128).pow(2) + (self.b as u128).pow(2);
        sum == (self.c as u128).pow(2)
    }

    /// True when a, b and c share no common factor
    pub fn is_primitive(&self) -> bool {
        self.is_valid() && gcd(gcd(self.a, self.b), self.c) == 1
    }

    /// Multiply every side by `k`; `None` if a side overflows u64.
    pub fn scaled(&self, k: u64) -> Option<Triple> {
        Some(Triple::new(
            self.a.checked_mul(k)?,
            self.b.checked_mul(k)?,
            self.c.checked_mul(k)?,
        ))
    }

    pub fn as_triangle(&self) -> Triangle {
        Triangle::new(self.a as f64, self.b as f64, self.c as f64)
    }

    /// "a² + b² = c²" with the numbers filled in, e.g. "9 + 16 = 25"
    pub fn equation(&self) -> String {
        let square = |x: u64| (x as u128).pow(2);
        format!("{} + {} = {}", square(self.a), square(self.b), square(self.c))
    }
}

/// Famous triples shown in the classroom table.
pub const COMMON_TRIPLES: [Triple; 10] = [
    Triple::new(3, 4, 5),
    Triple::new(5, 12, 13),
    Triple::new(8, 15, 17),
    Triple::new(7, 24, 25),
    Triple::new(20, 21, 29),
    Triple::new(9, 40, 41),
    Triple::new(12, 35, 37),
    Triple::new(11, 60, 61),
    Triple::new(13, 84, 85),
    Triple::new(36, 77, 85),
];

/// All primitive triples with c ≤ 100.
pub static PRIMITIVE_TRIPLES_TO_100: Lazy<Vec<Triple>> = Lazy::new(|| euclid_triples(100));

/// Enumerate every primitive triple with hypotenuse at most `max_c`.
///
/// Legs are ordered a < b; results are sorted by c, then a.
///
/// # Errors
///
/// `InvalidInput` if `max_c` exceeds [`MAX_TRIPLE_BOUND`].
pub fn primitive_triples(max_c: u64) -> CalcResult<Vec<Triple>> {
    if max_c > MAX_TRIPLE_BOUND {
        return Err(CalcError::invalid_input(
            "max_c",
            max_c.to_string(),
            format!("The bound must be at most {}", MAX_TRIPLE_BOUND),
        ));
    }
    Ok(euclid_triples(max_c))
}

/// Euclid's enumeration; `max_c` must be small enough that m² + n² fits in u64.
fn euclid_triples(max_c: u64) -> Vec<Triple> {
    let mut triples = Vec::new();

    let mut m: u64 = 2;
    // c = m² + n² > m², so m² < max_c bounds the search
    while m * m < max_c {
        for n in 1..m {
            if (m - n) % 2 == 0 || gcd(m, n) != 1 {
                continue;
            }
            let c = m * m + n * n;
            if c > max_c {
                break;
            }
            let x = m * m - n * n;
            let y = 2 * m * n;
            triples.push(Triple::new(x.min(y), x.max(y), c));
        }
        m += 1;
    }

    triples.sort_by_key(|t| (t.c, t.a));
    tracing::debug!(max_c, count = triples.len(), "generated primitive triples");
    triples
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::is_right_triangle;

    #[test]
    fn test_common_triples_are_right() {
        for t in COMMON_TRIPLES {
            assert!(t.is_valid(), "{:?}", t);
            assert!(t.is_primitive(), "{:?}", t);
            let tri = t.as_triangle();
            assert!(is_right_triangle(tri.a, tri.b, tri.c).unwrap(), "{:?}", t);
        }
    }

    #[test]
    fn test_invalid_triples() {
        assert!(!Triple::new(2, 3, 4).is_valid());
        assert!(!Triple::new(0, 5, 5).is_valid());
    }

    #[test]
    fn test_scaled_not_primitive() {
        let t = Triple::new(3, 4, 5).scaled(2).unwrap();
        assert_eq!(t, Triple::new(6, 8, 10));
        assert!(t.is_valid());
        assert!(!t.is_primitive());
    }

    #[test]
    fn test_scaled_overflow() {
        assert_eq!(Triple::new(3, 4, 5).scaled(u64::MAX / 4), None);
        assert!(Triple::new(3, 4, 5).scaled(u64::MAX / 5).is_some());
    }

    #[test]
    fn test_equation() {
        assert_eq!(Triple::new(3, 4, 5).equation(), "9 + 16 = 25");
    }

    #[test]
    fn test_equation_wide_sides() {
        let t = Triple::new(3_000_000_000_000, 4_000_000_000_000, 5_000_000_000_000);
        assert_eq!(
            t.equation(),
            "9000000000000000000000000 + 16000000000000000000000000 = 25000000000000000000000000"
        );
    }

    #[test]
    fn test_primitive_triples_small() {
        let triples = primitive_triples(30).unwrap();
        assert_eq!(
            triples,
            vec![
                Triple::new(3, 4, 5),
                Triple::new(5, 12, 13),
                Triple::new(8, 15, 17),
                Triple::new(7, 24, 25),
                Triple::new(20, 21, 29),
            ]
        );
    }

    #[test]
    fn test_primitive_triples_to_100() {
        // There are 16 primitive triples with c <= 100
        assert_eq!(PRIMITIVE_TRIPLES_TO_100.len(), 16);
        assert!(PRIMITIVE_TRIPLES_TO_100.iter().all(|t| t.is_primitive() && t.a < t.b));
        // Every common triple is primitive with c <= 100
        for t in COMMON_TRIPLES {
            assert!(PRIMITIVE_TRIPLES_TO_100.contains(&t), "{:?}", t);
        }
    }

    #[test]
    fn test_primitive_triples_empty() {
        assert!(primitive_triples(4).unwrap().is_empty());
        assert_eq!(primitive_triples(5).unwrap(), vec![Triple::new(3, 4, 5)]);
    }

    #[test]
    fn test_primitive_triples_bound_cap() {
        let largest = primitive_triples(MAX_TRIPLE_BOUND).unwrap();
        assert!(largest.iter().all(|t| t.c <= MAX_TRIPLE_BOUND));
        assert!(largest.last().unwrap().is_primitive());

        match primitive_triples(MAX_TRIPLE_BOUND + 1) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "max_c"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert!(primitive_triples(u64::MAX).is_err());
    }
}
