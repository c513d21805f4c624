//! Centralized constants for the lakehouse settings workspace.
//!
//! This module contains default values and well-known names used across
//! crates to avoid string duplication.

// =============================================================================
// Azure ML Runtime Defaults
// =============================================================================

/// Default Azure ML compute cluster used for training jobs.
pub const DEFAULT_AML_COMPUTE_NAME: &str = "demo-azure-ml-prod-cpu-small";

/// Default base image for Azure ML environments.
pub const DEFAULT_AML_BASE_IMAGE: &str = "mcr.microsoft.com/azureml/openmpi4.1.0-ubuntu20.04";

/// Default datastore URI of the curated train/test parquet output.
pub const DEFAULT_CURATED_TRAIN_TEST_PARQUET_URI: &str =
    "azureml://datastores/synapse_adls/paths/curated/train_test_parquet/";

// =============================================================================
// Derived Path Segments
// =============================================================================

/// Directory (under the repo root) holding Azure ML assets.
pub const AML_DIR_NAME: &str = "aml";

/// Directory (under the source dir) holding ETL job code.
pub const ETL_DIR_NAME: &str = "etl";

/// Directory (under the AML dir) holding conda environment specs.
pub const AML_ENV_DIR_NAME: &str = "environments";

/// Conda environment spec for the pandas/parquet jobs.
pub const PANDAS_PARQUET_ENV_FILE_NAME: &str = "pandas-parquet.yml";

// =============================================================================
// Dotenv
// =============================================================================

/// File name of the dotenv file looked up in the current directory.
pub const DOTENV_FILE_NAME: &str = ".env";

/// Setting this variable to `1` or `true` skips dotenv loading entirely.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Display
// =============================================================================

/// Placeholder printed in place of secret values.
pub const REDACTED: &str = "********";
