//! # Equation Registry
//!
//! Metadata for every formula the crate evaluates: display name, formula
//! text, variables, classical reference and the function implementing it.
//! `EQUATIONS.md` is generated from this table by `pythag equations`, which
//! calls [`write_equations_markdown`].
//!
//! ## Usage
//!
//! ```rust
//! use pythag_core::equations::registry::Equation;
//!
//! let meta = Equation::Hypotenuse.metadata();
//! assert_eq!(meta.formula_plain, "c = sqrt(a^2 + b^2)");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// References
// ============================================================================

/// Where a formula comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Reference {
    /// Euclid's Elements
    Elements { book: &'static str, proposition: &'static str },
    /// Plain algebraic rearrangement of another equation
    Algebra,
}

impl Reference {
    /// Format the reference for documentation
    pub fn citation(&self) -> String {
        match self {
            Reference::Elements { book, proposition } => {
                format!("Euclid, Elements, Book {}, {}", book, proposition)
            }
            Reference::Algebra => "Algebraic rearrangement".to_string(),
        }
    }
}

// ============================================================================
// Variables and Metadata
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "a", "c")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str) -> Self {
        Self { symbol, description }
    }
}

/// Complete metadata for an equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// What the equation calculates
    pub description: &'static str,
    /// Plain-text formula
    pub formula_plain: &'static str,
    /// Classical reference
    pub reference: Reference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Preconditions the solver enforces before evaluating
    pub preconditions: Vec<&'static str>,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation evaluated by pythag_core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// c = √(a² + b²)
    Hypotenuse,
    /// b = √(c² − a²)
    MissingLeg,
    /// |a² + b² − c²| < ε
    RightAngleTest,
    /// (m² − n², 2mn, m² + n²)
    EuclidTriple,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::Hypotenuse => EquationMetadata {
                name: "Hypotenuse from Legs",
                description: "Length of the hypotenuse of a right triangle with legs a and b",
                formula_plain: "c = sqrt(a^2 + b^2)",
                reference: Reference::Elements { book: "I", proposition: "Proposition 47" },
                variables: vec![
                    Variable::new("a", "First leg"),
                    Variable::new("b", "Second leg"),
                    Variable::new("c", "Hypotenuse"),
                ],
                preconditions: vec!["a > 0", "b > 0"],
                source_module: "equations/pythagoras.rs",
                source_function: "hypotenuse_from_legs",
            },

            Equation::MissingLeg => EquationMetadata {
                name: "Leg from Hypotenuse",
                description: "Length of the unknown leg given the hypotenuse and the other leg",
                formula_plain: "b = sqrt(c^2 - a^2)",
                reference: Reference::Algebra,
                variables: vec![
                    Variable::new("c", "Hypotenuse"),
                    Variable::new("a", "Known leg"),
                    Variable::new("b", "Unknown leg"),
                ],
                preconditions: vec!["c > 0", "a > 0", "a < c"],
                source_module: "equations/pythagoras.rs",
                source_function: "leg_from_hypotenuse",
            },

            Equation::RightAngleTest => EquationMetadata {
                name: "Right Angle Test",
                description: "Converse of the theorem: sides sorted ascending form a right triangle when the residual vanishes",
                formula_plain: "|a^2 + b^2 - c^2| < tolerance, with a <= b <= c",
                reference: Reference::Elements { book: "I", proposition: "Proposition 48" },
                variables: vec![
                    Variable::new("a", "Smallest side"),
                    Variable::new("b", "Middle side"),
                    Variable::new("c", "Largest side (candidate hypotenuse)"),
                ],
                preconditions: vec!["a, b, c > 0", "a^2 and c^2 are normal f64 values"],
                source_module: "equations/pythagoras.rs",
                source_function: "pythagorean_residual",
            },

            Equation::EuclidTriple => EquationMetadata {
                name: "Euclid's Formula",
                description: "Generates every primitive Pythagorean triple from coprime m > n > 0 of opposite parity",
                formula_plain: "a = m^2 - n^2, b = 2mn, c = m^2 + n^2",
                reference: Reference::Elements { book: "X", proposition: "Lemma 1 to Proposition 29" },
                variables: vec![
                    Variable::new("m", "Larger generator"),
                    Variable::new("n", "Smaller generator"),
                ],
                preconditions: vec!["m > n > 0", "gcd(m, n) = 1", "m - n odd", "c <= 1000000"],
                source_module: "triples.rs",
                source_function: "primitive_triples",
            },
        }
    }
}

/// All equations in documentation order.
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::Hypotenuse,
    Equation::MissingLeg,
    Equation::RightAngleTest,
    Equation::EuclidTriple,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Render the full equations reference as markdown.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(4_000);

    output.push_str(r#"# Pythagoras Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `pythag equations --output pythag_core/src/equations/EQUATIONS.md`

"#);

    for equation in ALL_EQUATIONS {
        let meta = equation.metadata();

        output.push_str(&format!("## {}\n\n", meta.name));
        output.push_str(&format!("{}\n\n", meta.description));
        output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

        if !meta.variables.is_empty() {
            output.push_str("**Variables:**\n\n");
            output.push_str("| Symbol | Description |\n");
            output.push_str("|--------|-------------|\n");
            for var in &meta.variables {
                output.push_str(&format!("| {} | {} |\n", var.symbol, var.description));
            }
            output.push('\n');
        }

        output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
        output.push_str(&format!(
            "**Source:** [`{}`]({})\n\n",
            meta.source_function, meta.source_module
        ));

        if !meta.preconditions.is_empty() {
            output.push_str("**Preconditions:**\n");
            for precondition in &meta.preconditions {
                output.push_str(&format!("- {}\n", precondition));
            }
            output.push('\n');
        }

        output.push_str("---\n\n");
    }

    output.push_str(&format!("**Total Equations:** {}\n", ALL_EQUATIONS.len()));
    output
}

/// Write the reference to `path`. Returns the number of bytes written.
pub fn write_equations_markdown(path: &Path) -> CalcResult<usize> {
    let markdown = generate_equations_markdown();
    fs::write(path, &markdown)
        .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))?;
    tracing::debug!(path = %path.display(), bytes = markdown.len(), "wrote equations reference");
    Ok(markdown.len())
}

/// Whether the file at `path` matches what the registry generates now.
pub fn equations_markdown_is_current(path: &Path) -> CalcResult<bool> {
    let existing = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(existing == generate_equations_markdown())
}
