//! Property-based tests for settings resolution.
//!
//! These tests verify resolution rules against randomly generated inputs
//! to catch edge cases that might not be covered by unit tests.
//!
//! Test coverage:
//! - Name matching: any ASCII case spelling of a variable resolves the field
//! - Defaults: any non-blank value overrides the compute default
//! - Unknown variables: extra variables never change the result

use proptest::prelude::*;

use lakehouse_config::{AmlSettings, ConfigLoader};

fn required_vars() -> Vec<(String, String)> {
    [
        ("AZURE_SUBSCRIPTION_ID", "sub"),
        ("AZURE_RESOURCE_GROUP", "rg"),
        ("AZURE_ML_WORKSPACE", "ws"),
        ("AZURE_LOCATION", "eastus"),
        ("ADLS_ACCOUNT_NAME", "acct"),
        ("ADLS_FILESYSTEM", "fs"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn build(vars: Vec<(String, String)>) -> AmlSettings {
    ConfigLoader::new()
        .with_vars(vars)
        .build_aml()
        .expect("required vars are present")
}

/// Strategy for re-casing a variable name one character at a time.
fn recased(name: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
        name.chars()
            .zip(upper)
            .map(|(c, u)| {
                if u {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

/// Strategy for values operators put in variables: no surrounding whitespace.
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9_./:-]{0,40}".prop_map(String::from)
}

/// Strategy for variable names outside the binding tables.
fn unknown_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{2,20}"
        .prop_filter("must not be a known variable", |name| {
            !required_vars().iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
                && !["AML_COMPUTE_NAME", "AML_BASE_IMAGE", "CURATED_TRAIN_TEST_PARQUET_URI"]
                    .iter()
                    .any(|k| k.eq_ignore_ascii_case(name))
        })
        .prop_map(String::from)
}

proptest! {
    #[test]
    fn prop_any_case_spelling_resolves(
        name in recased("AZURE_LOCATION"),
        value in value_strategy()
    ) {
        let mut vars: Vec<_> = required_vars()
            .into_iter()
            .filter(|(k, _)| k != "AZURE_LOCATION")
            .collect();
        vars.push((name, value.clone()));

        let settings = build(vars);
        prop_assert_eq!(settings.azure_location(), value.as_str());
    }

    #[test]
    fn prop_value_overrides_default(value in value_strategy()) {
        let mut vars = required_vars();
        vars.push(("AML_COMPUTE_NAME".to_string(), value.clone()));

        let settings = build(vars);
        prop_assert_eq!(settings.aml_compute_name(), value.as_str());
    }

    #[test]
    fn prop_unknown_vars_do_not_change_result(
        extra in proptest::collection::vec((unknown_name_strategy(), value_strategy()), 0..8)
    ) {
        let baseline = build(required_vars());
        let mut vars = required_vars();
        vars.extend(extra);

        prop_assert_eq!(build(vars), baseline);
    }
}
