//! Check command: fail unless every required variable resolves.

use anyhow::{Context, Result};
use lakehouse_config::{ConfigLoader, Profile};

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(loader: &ConfigLoader, profile: Profile, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    let settings = loader
        .build(profile)
        .with_context(|| format!("Settings check failed for profile '{}'", profile))?;

    let formatter = get_formatter(format);
    print!("{}", formatter.format_check_ok(&settings)?);
    Ok(())
}
