//! Typed settings records.
//!
//! Responsibilities:
//! - Define the Azure ML and Synapse settings records and the `Settings` enum over them.
//! - Compute the derived repository paths of the Azure ML record once, at construction.
//!
//! Does NOT handle:
//! - Reading variables or `.env` files (see the `loader` module).
//!
//! Invariants:
//! - Records are immutable: fields are private and only exposed through accessors.
//! - Every string field is non-empty.
//! - The Synapse admin password is a `SecretString`; `Debug` and `Serialize` redact it.

use secrecy::SecretString;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

use crate::constants::REDACTED;
use crate::fields;
use crate::loader::ConfigError;
use crate::loader::resolve::ResolvedFields;
use crate::paths::DerivedPaths;
use crate::profile::Profile;

/// Location of this source file, used as the anchor for derived paths.
pub fn default_loader_location() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/src/settings.rs"))
}

/// Azure subscription, ML workspace, and data lake identifiers shared by both profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct AzureCore {
    azure_subscription_id: String,
    azure_resource_group: String,
    azure_ml_workspace: String,
    azure_location: String,
    adls_account_name: String,
    adls_filesystem: String,
}

impl AzureCore {
    fn take(resolved: &mut ResolvedFields) -> Result<Self, ConfigError> {
        Ok(Self {
            azure_subscription_id: resolved.take(&fields::AZURE_SUBSCRIPTION_ID)?,
            azure_resource_group: resolved.take(&fields::AZURE_RESOURCE_GROUP)?,
            azure_ml_workspace: resolved.take(&fields::AZURE_ML_WORKSPACE)?,
            azure_location: resolved.take(&fields::AZURE_LOCATION)?,
            adls_account_name: resolved.take(&fields::ADLS_ACCOUNT_NAME)?,
            adls_filesystem: resolved.take(&fields::ADLS_FILESYSTEM)?,
        })
    }
}

/// Azure ML runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmlSettings {
    #[serde(flatten)]
    core: AzureCore,
    aml_compute_name: String,
    aml_base_image: String,
    curated_train_test_parquet_uri: String,
    #[serde(flatten)]
    paths: DerivedPaths,
}

impl AmlSettings {
    pub(crate) fn from_fields(
        mut resolved: ResolvedFields,
        loader_location: &Path,
    ) -> Result<Self, ConfigError> {
        let core = AzureCore::take(&mut resolved)?;
        let aml_compute_name = resolved.take(&fields::AML_COMPUTE_NAME)?;
        let aml_base_image = resolved.take(&fields::AML_BASE_IMAGE)?;
        let curated_train_test_parquet_uri =
            resolved.take(&fields::CURATED_TRAIN_TEST_PARQUET_URI)?;
        let paths = DerivedPaths::from_loader_location(loader_location);

        Ok(Self {
            core,
            aml_compute_name,
            aml_base_image,
            curated_train_test_parquet_uri,
            paths,
        })
    }

    pub fn azure_subscription_id(&self) -> &str {
        &self.core.azure_subscription_id
    }

    pub fn azure_resource_group(&self) -> &str {
        &self.core.azure_resource_group
    }

    pub fn azure_ml_workspace(&self) -> &str {
        &self.core.azure_ml_workspace
    }

    pub fn azure_location(&self) -> &str {
        &self.core.azure_location
    }

    pub fn aml_compute_name(&self) -> &str {
        &self.aml_compute_name
    }

    pub fn aml_base_image(&self) -> &str {
        &self.aml_base_image
    }

    pub fn adls_account_name(&self) -> &str {
        &self.core.adls_account_name
    }

    pub fn adls_filesystem(&self) -> &str {
        &self.core.adls_filesystem
    }

    pub fn curated_train_test_parquet_uri(&self) -> &str {
        &self.curated_train_test_parquet_uri
    }

    /// Repository layout derived from the loader location.
    pub fn paths(&self) -> &DerivedPaths {
        &self.paths
    }

    pub fn repo_root(&self) -> &Path {
        self.paths.repo_root()
    }

    pub fn src_dir(&self) -> &Path {
        self.paths.src_dir()
    }

    pub fn aml_dir(&self) -> &Path {
        self.paths.aml_dir()
    }

    pub fn etl_code_dir(&self) -> &Path {
        self.paths.etl_code_dir()
    }

    pub fn aml_env_dir(&self) -> &Path {
        self.paths.aml_env_dir()
    }

    pub fn pandas_parquet_env_file(&self) -> &Path {
        self.paths.pandas_parquet_env_file()
    }
}

fn redact<S: Serializer>(_: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(REDACTED)
}

/// Synapse workspace settings.
#[derive(Debug, Clone, Serialize)]
pub struct SynapseSettings {
    #[serde(flatten)]
    core: AzureCore,
    synapse_sql_admin_login: String,
    #[serde(serialize_with = "redact")]
    synapse_sql_admin_password: SecretString,
}

impl SynapseSettings {
    pub(crate) fn from_fields(mut resolved: ResolvedFields) -> Result<Self, ConfigError> {
        let core = AzureCore::take(&mut resolved)?;
        let synapse_sql_admin_login = resolved.take(&fields::SYNAPSE_SQL_ADMIN_LOGIN)?;
        let password = resolved.take(&fields::SYNAPSE_SQL_ADMIN_PASSWORD)?;

        Ok(Self {
            core,
            synapse_sql_admin_login,
            synapse_sql_admin_password: SecretString::new(password.into()),
        })
    }

    pub fn azure_subscription_id(&self) -> &str {
        &self.core.azure_subscription_id
    }

    pub fn azure_resource_group(&self) -> &str {
        &self.core.azure_resource_group
    }

    pub fn azure_ml_workspace(&self) -> &str {
        &self.core.azure_ml_workspace
    }

    pub fn azure_location(&self) -> &str {
        &self.core.azure_location
    }

    pub fn adls_account_name(&self) -> &str {
        &self.core.adls_account_name
    }

    pub fn adls_filesystem(&self) -> &str {
        &self.core.adls_filesystem
    }

    pub fn synapse_sql_admin_login(&self) -> &str {
        &self.synapse_sql_admin_login
    }

    /// The admin password. Call `expose_secret()` only at the point of use.
    pub fn synapse_sql_admin_password(&self) -> &SecretString {
        &self.synapse_sql_admin_password
    }
}

/// Settings of whichever profile the deployment runs.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "profile", rename_all = "lowercase")]
pub enum Settings {
    Aml(AmlSettings),
    Synapse(SynapseSettings),
}

impl Settings {
    pub fn profile(&self) -> Profile {
        match self {
            Settings::Aml(_) => Profile::Aml,
            Settings::Synapse(_) => Profile::Synapse,
        }
    }

    pub fn as_aml(&self) -> Option<&AmlSettings> {
        match self {
            Settings::Aml(s) => Some(s),
            Settings::Synapse(_) => None,
        }
    }

    pub fn as_synapse(&self) -> Option<&SynapseSettings> {
        match self {
            Settings::Synapse(s) => Some(s),
            Settings::Aml(_) => None,
        }
    }

    pub fn azure_subscription_id(&self) -> &str {
        &self.core().azure_subscription_id
    }

    pub fn azure_location(&self) -> &str {
        &self.core().azure_location
    }

    fn core(&self) -> &AzureCore {
        match self {
            Settings::Aml(s) => &s.core,
            Settings::Synapse(s) => &s.core,
        }
    }
}
