//! # Right-Triangle Equations
//!
//! All formulas used by the solver live here, in one place, so they can be
//! checked against a textbook and listed in `EQUATIONS.md`.
//!
//! ## Modules
//!
//! - [`pythagoras`] - The theorem and its rearrangements
//! - [`registry`] - Equation metadata and markdown generation

pub mod pythagoras;
pub mod registry;

pub use pythagoras::{hypotenuse_from_legs, leg_from_hypotenuse, pythagorean_residual};

pub use registry::{
    Equation,
    EquationMetadata,
    Reference,
    Variable,
    ALL_EQUATIONS,
    equations_markdown_is_current,
    generate_equations_markdown,
    write_equations_markdown,
};
