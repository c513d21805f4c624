//! Vars command: list the variables a profile reads.

use anyhow::Result;
use lakehouse_config::{Profile, fields_for};

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(profile: Profile, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);
    print!("{}", formatter.format_vars(profile, fields_for(profile))?);
    Ok(())
}
