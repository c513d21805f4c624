//! Shared test utilities for lakehouse-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide complete variable sets for both profiles.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Every variable either profile reads is cleared from the child environment.

use assert_cmd::Command;

/// Every variable either profile reads.
pub const ALL_VARS: &[&str] = &[
    "AZURE_SUBSCRIPTION_ID",
    "AZURE_RESOURCE_GROUP",
    "AZURE_ML_WORKSPACE",
    "AZURE_LOCATION",
    "AML_COMPUTE_NAME",
    "AML_BASE_IMAGE",
    "ADLS_ACCOUNT_NAME",
    "ADLS_FILESYSTEM",
    "CURATED_TRAIN_TEST_PARQUET_URI",
    "SYNAPSE_SQL_ADMIN_LOGIN",
    "SYNAPSE_SQL_ADMIN_PASSWORD",
];

/// Required Azure ML variables with test values.
pub const AML_VARS: &[(&str, &str)] = &[
    ("AZURE_SUBSCRIPTION_ID", "00000000-0000-0000-0000-000000000000"),
    ("AZURE_RESOURCE_GROUP", "rg-lakehouse-demo"),
    ("AZURE_ML_WORKSPACE", "mlw-lakehouse-demo"),
    ("AZURE_LOCATION", "westeurope"),
    ("ADLS_ACCOUNT_NAME", "stlakehousedemo"),
    ("ADLS_FILESYSTEM", "curated"),
];

/// Returns a hermetic `lakehouse-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Settings variables (in any case spelling) are cleared to ensure no leakage from the host.
pub fn lakehouse_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lakehouse-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");

    // Clear potential host leakage
    for (key, _) in std::env::vars() {
        if ALL_VARS.iter().any(|v| v.eq_ignore_ascii_case(&key)) || key.starts_with("LAKEHOUSE_") {
            cmd.env_remove(&key);
        }
    }

    cmd
}

/// Returns a hermetic command with every required Azure ML variable set.
#[allow(dead_code)]
pub fn lakehouse_cmd_with_aml_vars() -> Command {
    let mut cmd = lakehouse_cmd();
    cmd.envs(AML_VARS.iter().copied());
    cmd
}
