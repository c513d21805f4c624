//! Tests for the settings loader builder.
//!
//! Responsibilities:
//! - Test building both profiles from explicit variable sets.
//! - Test reading the process environment and `.env` files, and their precedence.
//! - Test batch reporting of missing required variables.
//!
//! Does NOT handle:
//! - Lookup details of a single layer (tested in env.rs).
//! - Binding table shape (tested in fields.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// A complete Azure ML variable set.
pub fn aml_vars() -> Vec<(&'static str, &'static str)> {
    vec![
        ("AZURE_SUBSCRIPTION_ID", "00000000-0000-0000-0000-000000000000"),
        ("AZURE_RESOURCE_GROUP", "rg-lakehouse-demo"),
        ("AZURE_ML_WORKSPACE", "mlw-lakehouse-demo"),
        ("AZURE_LOCATION", "westeurope"),
        ("ADLS_ACCOUNT_NAME", "stlakehousedemo"),
        ("ADLS_FILESYSTEM", "curated"),
    ]
}

/// A complete Synapse variable set.
pub fn synapse_vars() -> Vec<(&'static str, &'static str)> {
    let mut vars = aml_vars();
    vars.push(("SYNAPSE_SQL_ADMIN_LOGIN", "sqladmin"));
    vars.push(("SYNAPSE_SQL_ADMIN_PASSWORD", "correct-horse-battery-staple"));
    vars
}
