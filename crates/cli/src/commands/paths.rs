//! Paths command: print the repository paths derived from the settings location.
//!
//! Paths are computed only; nothing on disk is checked or created.

use anyhow::Result;
use lakehouse_config::{DerivedPaths, default_loader_location};
use std::path::PathBuf;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(loader_location: Option<PathBuf>, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    let location = loader_location.unwrap_or_else(default_loader_location);
    let paths = DerivedPaths::from_loader_location(&location);

    let formatter = get_formatter(format);
    print!("{}", formatter.format_paths(&location, &paths)?);
    Ok(())
}
