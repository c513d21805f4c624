//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the settings loader from `.env`, the environment, and `--set` overrides.
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup and exit codes (see `main()`).
//!
//! Invariants:
//! - `paths` and `vars` never read the environment or `.env`.
//! - `--set` overrides take precedence over the environment and `.env`.

use anyhow::{Context, Result};
use lakehouse_config::ConfigLoader;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show => {
            let loader = build_loader(&cli)?;
            commands::show::run(&loader, cli.profile, &cli.output)?;
        }
        Commands::Check => {
            let loader = build_loader(&cli)?;
            commands::check::run(&loader, cli.profile, &cli.output)?;
        }
        Commands::Paths { loader_location } => {
            commands::paths::run(loader_location, &cli.output)?;
        }
        Commands::Vars => {
            commands::vars::run(cli.profile, &cli.output)?;
        }
    }
    Ok(())
}

/// Layer `.env`, the process environment, and `--set` overrides.
fn build_loader(cli: &Cli) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();

    // Blank/whitespace-only values are ignored to fall back to ./.env
    if let Some(ref path) = cli.env_file {
        if !path.to_string_lossy().trim().is_empty() {
            loader = loader.with_env_file(path.clone());
        }
    }

    let mut loader = loader
        .load_dotenv()
        .context("Failed to load environment")?
        .from_env();

    for entry in &cli.overrides {
        loader = loader
            .with_override(entry)
            .context("Failed to apply --set override")?;
    }
    Ok(loader)
}
