//! Show command: print resolved settings and their sources.
//!
//! Responsibilities:
//! - Resolve every variable of the selected profile without failing on gaps.
//! - Print values (secrets redacted), sources, and derived paths for Azure ML.
//!
//! Does NOT handle:
//! - Failing on missing variables (see `check`).

use anyhow::Result;
use lakehouse_config::{ConfigLoader, DerivedPaths, Profile};
use tracing::info;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(loader: &ConfigLoader, profile: Profile, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    info!(%profile, "Resolving settings");
    let resolution = loader.resolve(profile);
    let paths = match profile {
        Profile::Aml => Some(DerivedPaths::from_loader_location(
            &loader.loader_location(),
        )),
        Profile::Synapse => None,
    };

    let formatter = get_formatter(format);
    print!("{}", formatter.format_resolution(&resolution, paths.as_ref())?);
    Ok(())
}
