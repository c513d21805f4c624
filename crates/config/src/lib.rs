//! Settings for the Azure ML / Synapse lakehouse jobs.
//!
//! This crate resolves Azure subscription, ML workspace, data lake, and
//! Synapse identifiers from environment variables and an optional `.env`
//! file into immutable, typed settings records.

pub mod constants;
pub mod fields;
mod global;
mod loader;
mod paths;
mod profile;
mod settings;

pub use fields::{FieldSpec, fields_for};
pub use global::{install, installed};
pub use loader::{
    ConfigError, ConfigLoader, EntryView, Resolution, ResolvedEntry, ResolvedValue, ValueSource,
    parse_override,
};
pub use paths::DerivedPaths;
pub use profile::Profile;
pub use settings::{AmlSettings, Settings, SynapseSettings, default_loader_location};
