use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pythag_core::{SolverSettings, Tolerance};

/// Pythagorean theorem calculator: solve and verify right triangles.
#[derive(Debug, Parser)]
#[command(name = "pythag", version, about)]
pub struct Cli {
    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// TOML settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tolerance for the right-triangle check
    #[arg(long, global = true, value_name = "EPS")]
    pub tolerance: Option<f64>,

    /// Scale the tolerance by the square of the longest side
    #[arg(long, global = true)]
    pub relative: bool,

    /// Decimals shown in results
    #[arg(long, global = true, value_name = "N")]
    pub precision: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Calculate the hypotenuse c from two legs a and b
    Hypotenuse {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Calculate a leg given the hypotenuse and the other leg
    Leg {
        #[arg(allow_negative_numbers = true)]
        c: f64,
        #[arg(allow_negative_numbers = true)]
        known: f64,
    },
    /// Verify whether three sides form a right triangle
    Verify {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// Learn about the Pythagorean theorem
    Explain,
    /// List Pythagorean triples
    Triples {
        /// List every primitive triple with hypotenuse up to this bound (at most 1000000)
        #[arg(long, value_name = "N")]
        max_c: Option<u64>,
    },
    /// Print the geometry of the squares-on-sides figure as JSON
    Figure {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        /// Leave out the squares on the sides
        #[arg(long)]
        no_squares: bool,
        /// Two-panel proof layout instead of the single figure
        #[arg(long, conflicts_with = "no_squares")]
        proof: bool,
    },
    /// Print the equations reference, or write it to a file
    Equations {
        /// Write the markdown here instead of stdout
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Fail if the file at --output differs from the registry
        #[arg(long, requires = "output")]
        check: bool,
    },
    /// Menu-driven session (the default)
    Interactive,
}

impl Cli {
    /// Settings from `--config` (or defaults) with command-line overrides applied.
    pub fn settings(&self) -> anyhow::Result<SolverSettings> {
        let mut settings = match &self.config {
            Some(path) => SolverSettings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => SolverSettings::default(),
        };

        let eps = self.tolerance.unwrap_or(settings.tolerance.epsilon());
        let relative = self.relative || matches!(settings.tolerance, Tolerance::Relative(_));
        settings.tolerance = if relative {
            Tolerance::Relative(eps)
        } else {
            Tolerance::Absolute(eps)
        };
        if let Some(precision) = self.precision {
            settings.display_precision = precision;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_hypotenuse() {
        let cli = parse(&["pythag", "hypotenuse", "3", "4"]);
        assert_eq!(cli.command, Some(Command::Hypotenuse { a: 3.0, b: 4.0 }));
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_negative_numbers() {
        let cli = parse(&["pythag", "leg", "5", "-3"]);
        assert_eq!(cli.command, Some(Command::Leg { c: 5.0, known: -3.0 }));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = parse(&["pythag", "verify", "3", "4", "5", "--json", "--tolerance", "1e-6"]);
        assert!(cli.json);
        assert_eq!(cli.tolerance, Some(1e-6));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert!(Cli::try_parse_from(["pythag", "hypotenuse", "three", "4"]).is_err());
        assert!(Cli::try_parse_from(["pythag", "verify", "3", "4"]).is_err());
    }

    #[test]
    fn test_parse_equations() {
        let cli = parse(&["pythag", "equations", "--output", "EQUATIONS.md", "--check"]);
        assert_eq!(
            cli.command,
            Some(Command::Equations { output: Some(PathBuf::from("EQUATIONS.md")), check: true })
        );
        assert!(Cli::try_parse_from(["pythag", "equations", "--check"]).is_err());
    }

    #[test]
    fn test_parse_figure_proof() {
        let cli = parse(&["pythag", "figure", "3", "4", "--proof"]);
        assert_eq!(cli.command, Some(Command::Figure { a: 3.0, b: 4.0, no_squares: false, proof: true }));
        assert!(Cli::try_parse_from(["pythag", "figure", "3", "4", "--proof", "--no-squares"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let cli = parse(&["pythag"]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = parse(&["pythag", "explain"]).settings().unwrap();
        assert_eq!(settings, SolverSettings::default());
    }

    #[test]
    fn test_settings_overrides() {
        let settings = parse(&["pythag", "--tolerance", "1e-6", "--relative", "--precision", "2", "explain"])
            .settings()
            .unwrap();
        assert_eq!(settings.tolerance, Tolerance::Relative(1e-6));
        assert_eq!(settings.display_precision, 2);
    }

    #[test]
    fn test_settings_relative_keeps_default_epsilon() {
        let settings = parse(&["pythag", "--relative", "explain"]).settings().unwrap();
        assert_eq!(settings.tolerance, Tolerance::Relative(1e-10));
    }

    #[test]
    fn test_settings_invalid_tolerance() {
        assert!(parse(&["pythag", "--tolerance", "0", "explain"]).settings().is_err());
    }

    #[test]
    fn test_settings_missing_config_file() {
        let err = parse(&["pythag", "--config", "/nonexistent/pythag.toml", "explain"])
            .settings()
            .unwrap_err();
        assert!(err.to_string().contains("loading settings"));
    }
}
