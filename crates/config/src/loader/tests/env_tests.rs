//! Tests for reading settings from the process environment.
//!
//! Responsibilities:
//! - Test `from_env()` against real process variables.
//! - Test precedence of builder overrides over environment variables.
//! - Test that blank variables are treated as unset.

use serial_test::serial;

use super::{aml_vars, env_lock};
use crate::loader::builder::{ConfigLoader, parse_override};
use crate::loader::error::ConfigError;

/// `aml_vars()` in the shape `temp_env::with_vars` expects.
fn aml_env() -> Vec<(&'static str, Option<&'static str>)> {
    aml_vars().into_iter().map(|(k, v)| (k, Some(v))).collect()
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    let _lock = env_lock().lock().unwrap();

    let mut vars = aml_env();
    vars.push(("AML_COMPUTE_NAME", Some("custom-cluster")));

    temp_env::with_vars(vars, || {
        let settings = ConfigLoader::new().from_env().build_aml().unwrap();
        assert_eq!(settings.aml_compute_name(), "custom-cluster");
        assert_eq!(settings.azure_resource_group(), "rg-lakehouse-demo");
    });
}

#[test]
#[serial]
fn test_from_env_lowercase_names() {
    let _lock = env_lock().lock().unwrap();

    let vars: Vec<(String, Option<&str>)> = aml_vars()
        .into_iter()
        .filter(|(k, _)| *k != "AZURE_LOCATION")
        .map(|(k, v)| (k.to_string(), Some(v)))
        .chain([("azure_location".to_string(), Some("eastus"))])
        .collect();

    temp_env::with_vars(vars, || {
        let settings = ConfigLoader::new().from_env().build_aml().unwrap();
        assert_eq!(settings.azure_location(), "eastus");
    });
}

#[test]
#[serial]
fn test_blank_env_var_falls_back_to_default() {
    let _lock = env_lock().lock().unwrap();

    let mut vars = aml_env();
    vars.push(("AML_COMPUTE_NAME", Some("   ")));

    temp_env::with_vars(vars, || {
        let settings = ConfigLoader::new().from_env().build_aml().unwrap();
        assert_eq!(settings.aml_compute_name(), "demo-azure-ml-prod-cpu-small");
    });
}

#[test]
#[serial]
fn test_blank_required_env_var_is_missing() {
    let _lock = env_lock().lock().unwrap();

    let mut vars = aml_env();
    vars.retain(|(k, _)| *k != "ADLS_ACCOUNT_NAME");
    vars.push(("ADLS_ACCOUNT_NAME", Some("")));

    temp_env::with_vars(vars, || {
        let err = ConfigLoader::new().from_env().build_aml().unwrap_err();
        assert_eq!(err.missing_fields(), ["ADLS_ACCOUNT_NAME".to_string()]);
    });
}

#[test]
#[serial]
fn test_override_beats_environment() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(aml_env(), || {
        let settings = ConfigLoader::new()
            .from_env()
            .with_override("AZURE_LOCATION=swedencentral")
            .unwrap()
            .build_aml()
            .unwrap();
        assert_eq!(settings.azure_location(), "swedencentral");
    });
}

#[test]
#[serial]
fn test_unknown_env_vars_do_not_fail() {
    let _lock = env_lock().lock().unwrap();

    let mut vars = aml_env();
    vars.push(("FOO_BAR", Some("baz")));

    temp_env::with_vars(vars, || {
        assert!(ConfigLoader::new().from_env().build_aml().is_ok());
    });
}

#[test]
fn test_parse_override() {
    assert_eq!(
        parse_override("AML_COMPUTE_NAME=gpu-cluster").unwrap(),
        ("AML_COMPUTE_NAME".to_string(), "gpu-cluster".to_string())
    );
    // Only the first '=' splits
    assert_eq!(
        parse_override(" KEY =a=b").unwrap(),
        ("KEY".to_string(), "a=b".to_string())
    );
}

#[test]
fn test_parse_override_rejects_missing_key() {
    assert!(matches!(
        parse_override("=value"),
        Err(ConfigError::InvalidOverride { ref key }) if key.is_empty()
    ));
    assert!(matches!(
        parse_override("NO_EQUALS_SIGN"),
        Err(ConfigError::InvalidOverride { ref key }) if key == "NO_EQUALS_SIGN"
    ));
}

#[test]
fn test_invalid_override_message_omits_value() {
    let err = parse_override("=hunter2").unwrap_err();
    assert!(!err.to_string().contains("hunter2"));
}

#[test]
fn test_override_without_equals_omits_value() {
    let err = parse_override("SYNAPSE_SQL_ADMIN_PASSWORD hunter2").unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InvalidOverride { ref key } if key == "SYNAPSE_SQL_ADMIN_PASSWORD"
    ));
    assert!(!err.to_string().contains("hunter2"));
}
