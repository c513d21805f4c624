//! Lakehouse CLI - inspect and validate lakehouse settings.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve settings through the shared `lakehouse-config` crate.
//! - Print results as tables or JSON and exit with structured codes.
//!
//! Does NOT handle:
//! - Settings resolution rules (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr; command output goes to stdout.
//! - Secret values are never printed.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Usage errors exit 1; exit code 2 is reserved for missing configuration.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::GeneralError
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            std::process::exit(code.as_i32());
        }
    };

    if cli.log_json {
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
