//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve settings (see the `lakehouse-config` crate).

use clap::{Parser, Subcommand};
use lakehouse_config::Profile;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lakehouse-cli")]
#[command(about = "Inspect and validate Azure ML / Synapse lakehouse settings", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  lakehouse-cli check\n  lakehouse-cli --profile synapse show\n  lakehouse-cli --set AML_COMPUTE_NAME=gpu-cluster show -o json\n  lakehouse-cli paths --loader-location /repo/src/settings\n"
)]
pub struct Cli {
    /// Settings profile to resolve (aml, synapse)
    #[arg(
        long,
        global = true,
        env = "LAKEHOUSE_PROFILE",
        default_value = "aml",
        value_parser = parse_profile
    )]
    pub profile: Profile,

    /// Path to the .env file (defaults to ./.env)
    #[arg(long, global = true, env = "LAKEHOUSE_ENV_FILE", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Override a variable for this run (KEY=VALUE, repeatable)
    #[arg(long = "set", global = true, value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Emit logs as JSON lines on stderr (level is still set via RUST_LOG)
    #[arg(long, global = true, env = "LAKEHOUSE_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved settings and where each value came from
    Show,

    /// Verify every required variable is set
    Check,

    /// Show repository paths derived from the settings location
    Paths {
        /// Compute paths from this location instead of the settings source file
        #[arg(long, value_name = "PATH")]
        loader_location: Option<PathBuf>,
    },

    /// List the variables a profile reads
    Vars,
}

fn parse_profile(s: &str) -> Result<Profile, String> {
    s.parse::<Profile>().map_err(|e| e.to_string())
}
