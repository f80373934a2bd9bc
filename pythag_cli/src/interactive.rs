//! Menu-driven session: pick an operation, type the numbers, read the
//! explanation, repeat until "5".

use std::io::{self, BufRead, Write};

use pythag_core::explain::{explain_theorem, HypotenuseSolution, LegSolution, Verification};
use pythag_core::{CalcResult, TriangleSolver};

use crate::commands::{write_steps, write_verification};

const MENU: &str = "
What would you like to do?
  1. Calculate hypotenuse (c) from two sides (a, b)
  2. Calculate a side given hypotenuse and another side
  3. Verify if three sides form a right triangle
  4. Learn about the Pythagorean theorem
  5. Exit";

/// Outcome of reading one number from the user.
enum Reply {
    Number(f64),
    NotANumber,
    Eof,
}

fn prompt_f64<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Reply> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Reply::Eof);
    }
    Ok(match line.trim().parse() {
        Ok(value) => Reply::Number(value),
        Err(_) => Reply::NotANumber,
    })
}

/// Read `prompts.len()` numbers; `None` when the user typed garbage or input ended.
fn read_numbers<R: BufRead, W: Write, const N: usize>(
    input: &mut R,
    out: &mut W,
    prompts: [&str; N],
) -> io::Result<Option<[f64; N]>> {
    let mut values = [0.0; N];
    for (slot, prompt) in values.iter_mut().zip(prompts) {
        match prompt_f64(input, out, prompt)? {
            Reply::Number(v) => *slot = v,
            Reply::NotANumber => {
                writeln!(out, "\n✗ Error: Invalid input. Please enter numbers.")?;
                return Ok(None);
            }
            Reply::Eof => return Ok(None),
        }
    }
    Ok(Some(values))
}

fn report<W: Write, T>(out: &mut W, result: CalcResult<T>, show: impl FnOnce(&mut W, T) -> io::Result<()>) -> io::Result<()> {
    match result {
        Ok(value) => show(out, value),
        Err(e) => {
            tracing::debug!(code = e.error_code(), "rejected input");
            writeln!(out, "\n✗ Error: {}", e)
        }
    }
}

/// Run the menu loop until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(solver: &TriangleSolver, mut input: R, mut out: W) -> io::Result<()> {
    let precision = solver.settings().display_precision;
    let out = &mut out;

    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "  PYTHAGOREAN THEOREM SIMULATOR")?;
    writeln!(out, "  Learn about right triangles!")?;
    writeln!(out, "{}", "=".repeat(60))?;

    loop {
        writeln!(out, "{}", MENU)?;
        write!(out, "\nEnter your choice (1-5): ")?;
        out.flush()?;

        let mut choice = String::new();
        if input.read_line(&mut choice)? == 0 {
            tracing::debug!("input closed, leaving interactive session");
            return Ok(());
        }

        match choice.trim() {
            "1" => {
                if let Some([a, b]) = read_numbers(&mut input, out, ["Enter side a: ", "Enter side b: "])? {
                    report(out, HypotenuseSolution::compute(solver, a, b), |out, s| {
                        writeln!(out, "\n✓ Result: {}", s.summary(precision))?;
                        write_steps(out, "Explanation", &s.steps(precision))
                    })?;
                }
            }
            "2" => {
                let prompts = ["Enter the hypotenuse (c): ", "Enter the known side: "];
                if let Some([c, side]) = read_numbers(&mut input, out, prompts)? {
                    report(out, LegSolution::compute(solver, c, side), |out, s| {
                        writeln!(out, "\n✓ Result: {}", s.summary(precision))?;
                        write_steps(out, "Explanation", &s.steps(precision))
                    })?;
                }
            }
            "3" => {
                let prompts = ["Enter side a: ", "Enter side b: ", "Enter side c: "];
                if let Some([a, b, c]) = read_numbers(&mut input, out, prompts)? {
                    report(out, Verification::compute(solver, a, b, c), |out, v| {
                        writeln!(out)?;
                        write_verification(out, &v, precision)
                    })?;
                }
            }
            "4" => writeln!(out, "{}", explain_theorem())?,
            "5" => {
                writeln!(out, "\nThank you for using the Pythagorean Theorem Simulator!")?;
                writeln!(out, "Keep learning! 📐\n")?;
                return Ok(());
            }
            _ => writeln!(out, "\n✗ Invalid choice. Please enter 1, 2, 3, 4, or 5.")?,
        }
    }
}
