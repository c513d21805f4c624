//! `.env` file reading.
//!
//! Responsibilities:
//! - Read `KEY=VALUE` entries from a `.env` file into an [`EnvLayer`].
//! - Honour the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Precedence against the process environment (see env.rs).
//!
//! Invariants:
//! - A missing file is not an error.
//! - The process environment is never modified.
//! - Errors never include raw .env line contents.

use std::path::Path;

use super::env::{EnvLayer, env_var_or_none};
use super::error::ConfigError;
use crate::constants::DOTENV_DISABLED_VAR;

/// Check if dotenv loading is disabled via environment variable.
pub(crate) fn dotenv_disabled() -> bool {
    matches!(
        env_var_or_none(DOTENV_DISABLED_VAR).as_deref(),
        Some("true") | Some("1")
    )
}

/// Read `path` into a layer.
///
/// Returns `Ok(None)` when the file does not exist.
pub(crate) fn read_dotenv(path: &Path) -> Result<Option<EnvLayer>, ConfigError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if is_not_found(&e) => {
            tracing::debug!(path = %path.display(), "No .env file found");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let mut layer = EnvLayer::default();
    for item in iter {
        let (key, value) = item?;
        layer.push(key, value);
    }
    Ok(Some(layer))
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
