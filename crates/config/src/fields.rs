//! Field binding tables for the settings profiles.
//!
//! Responsibilities:
//! - Map every settings field to the environment variable that supplies it.
//! - Declare which fields are required, which carry a default, and which are secret.
//!
//! Does NOT handle:
//! - Reading the environment (see `loader::env`).
//! - Building the typed settings records (see `settings.rs`).
//!
//! Invariants:
//! - Environment variable names are upper-case and unique within a table.
//! - A field is required exactly when it has no default.
//! - Table order is the order fields are resolved and reported in.

use crate::constants::{
    DEFAULT_AML_BASE_IMAGE, DEFAULT_AML_COMPUTE_NAME, DEFAULT_CURATED_TRAIN_TEST_PARQUET_URI,
};
use crate::profile::Profile;

/// Binding of one settings field to its environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name on the settings record.
    pub field: &'static str,
    /// Environment variable name (matched case-insensitively).
    pub env: &'static str,
    /// Value used when the variable is unset.
    pub default: Option<&'static str>,
    /// Whether the value must never be displayed.
    pub secret: bool,
}

impl FieldSpec {
    const fn required(field: &'static str, env: &'static str) -> Self {
        Self {
            field,
            env,
            default: None,
            secret: false,
        }
    }

    const fn optional(field: &'static str, env: &'static str, default: &'static str) -> Self {
        Self {
            field,
            env,
            default: Some(default),
            secret: false,
        }
    }

    const fn secret(field: &'static str, env: &'static str) -> Self {
        Self {
            field,
            env,
            default: None,
            secret: true,
        }
    }

    /// Returns true if resolution fails when this field has no value.
    pub const fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

pub const AZURE_SUBSCRIPTION_ID: FieldSpec =
    FieldSpec::required("azure_subscription_id", "AZURE_SUBSCRIPTION_ID");
pub const AZURE_RESOURCE_GROUP: FieldSpec =
    FieldSpec::required("azure_resource_group", "AZURE_RESOURCE_GROUP");
pub const AZURE_ML_WORKSPACE: FieldSpec =
    FieldSpec::required("azure_ml_workspace", "AZURE_ML_WORKSPACE");
pub const AZURE_LOCATION: FieldSpec = FieldSpec::required("azure_location", "AZURE_LOCATION");

pub const AML_COMPUTE_NAME: FieldSpec = FieldSpec::optional(
    "aml_compute_name",
    "AML_COMPUTE_NAME",
    DEFAULT_AML_COMPUTE_NAME,
);
pub const AML_BASE_IMAGE: FieldSpec =
    FieldSpec::optional("aml_base_image", "AML_BASE_IMAGE", DEFAULT_AML_BASE_IMAGE);

pub const ADLS_ACCOUNT_NAME: FieldSpec =
    FieldSpec::required("adls_account_name", "ADLS_ACCOUNT_NAME");
pub const ADLS_FILESYSTEM: FieldSpec = FieldSpec::required("adls_filesystem", "ADLS_FILESYSTEM");

pub const CURATED_TRAIN_TEST_PARQUET_URI: FieldSpec = FieldSpec::optional(
    "curated_train_test_parquet_uri",
    "CURATED_TRAIN_TEST_PARQUET_URI",
    DEFAULT_CURATED_TRAIN_TEST_PARQUET_URI,
);

pub const SYNAPSE_SQL_ADMIN_LOGIN: FieldSpec =
    FieldSpec::required("synapse_sql_admin_login", "SYNAPSE_SQL_ADMIN_LOGIN");
pub const SYNAPSE_SQL_ADMIN_PASSWORD: FieldSpec =
    FieldSpec::secret("synapse_sql_admin_password", "SYNAPSE_SQL_ADMIN_PASSWORD");

/// Fields of the Azure ML profile.
pub const AML_FIELDS: &[FieldSpec] = &[
    AZURE_SUBSCRIPTION_ID,
    AZURE_RESOURCE_GROUP,
    AZURE_ML_WORKSPACE,
    AZURE_LOCATION,
    AML_COMPUTE_NAME,
    AML_BASE_IMAGE,
    ADLS_ACCOUNT_NAME,
    ADLS_FILESYSTEM,
    CURATED_TRAIN_TEST_PARQUET_URI,
];

/// Fields of the Synapse profile.
pub const SYNAPSE_FIELDS: &[FieldSpec] = &[
    AZURE_SUBSCRIPTION_ID,
    AZURE_RESOURCE_GROUP,
    AZURE_ML_WORKSPACE,
    AZURE_LOCATION,
    ADLS_ACCOUNT_NAME,
    ADLS_FILESYSTEM,
    SYNAPSE_SQL_ADMIN_LOGIN,
    SYNAPSE_SQL_ADMIN_PASSWORD,
];

/// Returns the binding table of a profile.
pub fn fields_for(profile: Profile) -> &'static [FieldSpec] {
    match profile {
        Profile::Aml => AML_FIELDS,
        Profile::Synapse => SYNAPSE_FIELDS,
    }
}
