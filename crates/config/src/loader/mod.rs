//! Settings loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Capture variables from the process environment, a `.env` file, and explicit overrides.
//! - Provide a builder-pattern `ConfigLoader` that resolves and builds a settings profile.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Declaring which variables exist (see `fields.rs`).
//! - Holding the built settings for the rest of the process (see `global.rs`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over `.env` entries.
//! - Variable names are matched case-insensitively; unknown variables are ignored.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - Every missing required variable is reported in a single error.

mod builder;
mod dotenv;
mod env;
mod error;
pub(crate) mod resolve;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, parse_override};
pub use env::ValueSource;
pub use error::ConfigError;
pub use resolve::{EntryView, Resolution, ResolvedEntry, ResolvedValue};
