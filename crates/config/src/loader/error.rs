//! Error types for settings loading.
//!
//! Responsibilities:
//! - Define error variants for all settings loading failures.
//! - Format missing-variable reports so operators can fix every gap at once.
//!
//! Does NOT handle:
//! - Process exit codes (see the CLI crate).
//!
//! Invariants:
//! - `MissingRequiredConfiguration` lists every unresolved variable, in table order.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - No variant carries a resolved value.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during settings loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required variables had no value and no default.
    #[error("Missing required configuration: {}", fields.join(", "))]
    MissingRequiredConfiguration { fields: Vec<String> },

    /// An explicit `KEY=VALUE` override could not be parsed.
    ///
    /// Only the key part is kept so a mistyped secret never reaches logs.
    #[error("Invalid override '{key}': expected KEY=VALUE")]
    InvalidOverride { key: String },

    #[error("Unknown settings profile '{0}'. Valid options: aml, synapse")]
    UnknownProfile(String),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Names of the missing variables, if this is a missing-configuration error.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            ConfigError::MissingRequiredConfiguration { fields } => fields,
            _ => &[],
        }
    }
}

impl From<dotenvy::Error> for ConfigError {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }
}
