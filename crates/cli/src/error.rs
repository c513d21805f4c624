//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 always means required configuration is missing.

use lakehouse_config::ConfigError;

/// Structured exit codes for lakehouse-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - bad arguments, unreadable `.env`, or any other failure.
    GeneralError = 1,

    /// One or more required variables are unset.
    ///
    /// Scripts should set the listed variables and run again.
    MissingConfiguration = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingRequiredConfiguration { .. } => ExitCode::MissingConfiguration,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
