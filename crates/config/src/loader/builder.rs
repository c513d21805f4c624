//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that layers `.env` entries, the process
//!   environment, and explicit overrides.
//! - Resolve and build the typed settings of a profile.
//!
//! Does NOT handle:
//! - Case-insensitive variable lookup (delegated to env.rs).
//! - `.env` parsing (delegated to dotenv.rs).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - Environment variables take precedence over `.env` entries.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before the `.env` file is read.
//! - The process environment is never modified.

use std::path::{Path, PathBuf};

use super::dotenv::{dotenv_disabled, read_dotenv};
use super::env::{EnvLayer, EnvSnapshot};
use super::error::ConfigError;
use super::resolve::Resolution;
use crate::constants::DOTENV_FILE_NAME;
use crate::profile::Profile;
use crate::settings::{AmlSettings, Settings, SynapseSettings, default_loader_location};

/// Settings loader that resolves profiles from layered variable sources.
#[derive(Clone, Default)]
pub struct ConfigLoader {
    env_file: Option<PathBuf>,
    loader_location: Option<PathBuf>,
    snapshot: EnvSnapshot,
}

impl ConfigLoader {
    /// Create a new settings loader with no variable sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the `.env` file from `path` instead of `./.env`.
    pub fn with_env_file(mut self, path: PathBuf) -> Self {
        self.env_file = Some(path);
        self
    }

    /// Path of the `.env` file `load_dotenv()` reads.
    pub fn env_file(&self) -> &Path {
        self.env_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DOTENV_FILE_NAME))
    }

    /// Load entries from the `.env` file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// Entries only fill in variables the environment does not provide;
    /// nothing is written to the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(mut self) -> Result<Self, ConfigError> {
        if dotenv_disabled() {
            tracing::debug!("Skipping .env loading: DOTENV_DISABLED is set");
            return Ok(self);
        }

        let path = self.env_file().to_path_buf();
        if let Some(layer) = read_dotenv(&path)? {
            tracing::info!(path = %path.display(), "Loaded .env file");
            self.snapshot.dotenv = layer;
        }
        Ok(self)
    }

    /// Read variables from the process environment.
    ///
    /// Replaces any variables captured by an earlier `from_env()` or `with_vars()`.
    pub fn from_env(mut self) -> Self {
        self.snapshot.process = EnvLayer::from_process();
        self
    }

    /// Use `vars` in place of the process environment.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.snapshot.process = EnvLayer::from_pairs(vars);
        self
    }

    /// Set one variable with the highest precedence.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.snapshot.overrides.push(key.into(), value.into());
        self
    }

    /// Set one variable from a `KEY=VALUE` string with the highest precedence.
    pub fn with_override(self, entry: &str) -> Result<Self, ConfigError> {
        let (key, value) = parse_override(entry)?;
        Ok(self.with_var(key, value))
    }

    /// Anchor derived paths at `path` instead of the settings source file.
    pub fn with_loader_location(mut self, path: PathBuf) -> Self {
        self.loader_location = Some(path);
        self
    }

    /// Location derived paths are computed from.
    pub fn loader_location(&self) -> PathBuf {
        self.loader_location
            .clone()
            .unwrap_or_else(default_loader_location)
    }

    /// Resolve every field of `profile` without failing on missing values.
    pub fn resolve(&self, profile: Profile) -> Resolution {
        if self.snapshot.process.is_empty() && self.snapshot.dotenv.is_empty() {
            tracing::debug!("Resolving with no environment or .env variables captured");
        }
        Resolution::resolve(profile, &self.snapshot)
    }

    /// Build the Azure ML settings.
    pub fn build_aml(&self) -> Result<AmlSettings, ConfigError> {
        let fields = self.resolve(Profile::Aml).into_fields()?;
        AmlSettings::from_fields(fields, &self.loader_location())
    }

    /// Build the Synapse settings.
    pub fn build_synapse(&self) -> Result<SynapseSettings, ConfigError> {
        let fields = self.resolve(Profile::Synapse).into_fields()?;
        SynapseSettings::from_fields(fields)
    }

    /// Build the settings of `profile`.
    pub fn build(&self, profile: Profile) -> Result<Settings, ConfigError> {
        match profile {
            Profile::Aml => self.build_aml().map(Settings::Aml),
            Profile::Synapse => self.build_synapse().map(Settings::Synapse),
        }
    }
}

/// Split a `KEY=VALUE` string. The key is trimmed and must be non-empty.
pub fn parse_override(entry: &str) -> Result<(String, String), ConfigError> {
    match entry.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        Some((key, _)) => Err(ConfigError::InvalidOverride {
            key: key.trim().to_string(),
        }),
        // Without '=' the key ends at the first whitespace; the rest may be a value.
        None => Err(ConfigError::InvalidOverride {
            key: entry
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string(),
        }),
    }
}
