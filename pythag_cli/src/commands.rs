//! One-shot commands. Each writes its report to `out` so the same code
//! serves the terminal and the tests.

use std::io::Write;

use pythag_core::equations::{
    equations_markdown_is_current, generate_equations_markdown, write_equations_markdown,
};
use pythag_core::explain::{explain_theorem, HypotenuseSolution, LegSolution, Verification};
use pythag_core::figure::FigureBuilder;
use pythag_core::triples::{primitive_triples, Triple, COMMON_TRIPLES};
use pythag_core::TriangleSolver;
use serde::Serialize;

use crate::cli::Command;

/// Run a non-interactive command.
pub fn execute<W: Write>(
    command: &Command,
    solver: &TriangleSolver,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let precision = solver.settings().display_precision;

    match command {
        Command::Hypotenuse { a, b } => {
            let solution = HypotenuseSolution::compute(solver, *a, *b)?;
            if json {
                return write_json(out, &solution);
            }
            writeln!(out, "✓ Result: {}", solution.summary(precision))?;
            write_steps(out, "Explanation", &solution.steps(precision))?;
        }
        Command::Leg { c, known } => {
            let solution = LegSolution::compute(solver, *c, *known)?;
            if json {
                return write_json(out, &solution);
            }
            writeln!(out, "✓ Result: {}", solution.summary(precision))?;
            write_steps(out, "Explanation", &solution.steps(precision))?;
        }
        Command::Verify { a, b, c } => {
            let verification = Verification::compute(solver, *a, *b, *c)?;
            if json {
                return write_json(out, &verification);
            }
            write_verification(out, &verification, precision)?;
        }
        Command::Explain => {
            writeln!(out, "{}", explain_theorem())?;
        }
        Command::Triples { max_c } => {
            let (title, triples) = match max_c {
                Some(max_c) => (
                    format!("Primitive Pythagorean triples with c <= {}", max_c),
                    primitive_triples(*max_c)?,
                ),
                None => (
                    "Common Pythagorean Triples (right triangles)".to_string(),
                    COMMON_TRIPLES.to_vec(),
                ),
            };
            if json {
                return write_json(out, &triples);
            }
            write_triples_table(out, &title, &triples)?;
        }
        Command::Figure { a, b, no_squares, proof } => {
            let builder = FigureBuilder::new(solver).show_squares(!no_squares);
            if *proof {
                write_json(out, &builder.build_proof(*a, *b)?)?;
            } else {
                write_json(out, &builder.build(*a, *b)?)?;
            }
        }
        Command::Equations { output, check } => match output {
            None => write!(out, "{}", generate_equations_markdown())?,
            Some(path) if *check => {
                if !equations_markdown_is_current(path)? {
                    anyhow::bail!("{} is out of date, regenerate it with --output", path.display());
                }
                writeln!(out, "✓ {} is up to date", path.display())?;
            }
            Some(path) => {
                let bytes = write_equations_markdown(path)?;
                writeln!(out, "✓ Wrote {} bytes to {}", bytes, path.display())?;
            }
        },
        Command::Interactive => {
            anyhow::bail!("interactive mode needs a terminal session");
        }
    }

    Ok(())
}

pub(crate) fn write_steps<W: Write>(out: &mut W, heading: &str, steps: &[String]) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}:", heading)?;
    for step in steps {
        writeln!(out, "  {}", step)?;
    }
    Ok(())
}

pub(crate) fn write_verification<W: Write>(
    out: &mut W,
    verification: &Verification,
    precision: usize,
) -> std::io::Result<()> {
    let icon = if verification.is_right { "✓" } else { "✗" };
    writeln!(out, "{} Result: {}", icon, verification.summary())?;
    write_steps(out, "Verification", &verification.steps(precision))
}

fn write_triples_table<W: Write>(out: &mut W, title: &str, triples: &[Triple]) -> std::io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(60))?;
    writeln!(out, "{:<15} {:<20} {:<15}", "Sides (a, b, c)", "Equation", "Result")?;
    for t in triples {
        writeln!(
            out,
            "{:<15} {:<20} {:<15}",
            format!("({}, {}, {})", t.a, t.b, t.c),
            format!("{}² + {}² = {}²", t.a, t.b, t.c),
            t.equation()
        )?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
