//! # pythag_core - Right-Triangle Calculation Engine
//!
//! `pythag_core` is the computational heart of Pythagoras, an educational
//! calculator for right triangles. All inputs and outputs are plain values
//! that serialize to JSON.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Results and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use pythag_core::{solve_hypotenuse, solve_leg, is_right_triangle};
//!
//! let c = solve_hypotenuse(3.0, 4.0).unwrap();
//! assert_eq!(c, 5.0);
//! assert_eq!(solve_leg(c, 3.0).unwrap(), 4.0);
//! assert!(is_right_triangle(3.0, 4.0, 5.0).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`solver`] - The three solver operations
//! - [`triangle`] - The triangle value type
//! - [`settings`] - Tolerance and presentation settings
//! - [`explain`] - Worked solutions and the theorem text
//! - [`triples`] - Pythagorean triples
//! - [`figure`] - Geometry for the squares-on-sides figure
//! - [`equations`] - Formulas and their registry
//! - [`errors`] - Structured error types

pub mod equations;
pub mod errors;
pub mod explain;
pub mod figure;
pub mod settings;
pub mod solver;
pub mod triangle;
pub mod triples;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use settings::{SolverSettings, Tolerance};
pub use solver::{is_right_triangle, solve_hypotenuse, solve_leg, TriangleSolver};
pub use triangle::Triangle;
