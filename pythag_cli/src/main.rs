//! # Pythagoras CLI Application
//!
//! Terminal front-end for the right-triangle calculator. One-shot
//! subcommands print a result with its worked explanation (or JSON with
//! `--json`); with no subcommand it starts the interactive menu.

mod cli;
mod commands;
mod interactive;
mod logger;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use pythag_core::{CalcError, TriangleSolver};

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed command line");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %format!("{:#}", e), "command failed");
            eprintln!("✗ Error: {:#}", e);
            if cli.json {
                if let Some(calc) = e.downcast_ref::<CalcError>() {
                    if let Ok(json) = serde_json::to_string_pretty(calc) {
                        eprintln!("{}", json);
                    }
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = cli.settings()?;
    let solver = TriangleSolver::new(settings)?;
    tracing::debug!(?settings, "solver ready");

    match &cli.command {
        None | Some(Command::Interactive) => {
            interactive::run(&solver, io::stdin().lock(), io::stdout().lock())?;
        }
        Some(command) => {
            let mut stdout = io::stdout().lock();
            commands::execute(command, &solver, cli.json, &mut stdout)?;
        }
    }
    Ok(())
}
