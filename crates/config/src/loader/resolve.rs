//! Field resolution against a binding table.
//!
//! Responsibilities:
//! - Resolve every field of a profile from an [`EnvSnapshot`], falling back to defaults.
//! - Collect all unresolved required fields for batch reporting.
//!
//! Invariants:
//! - Entries keep the order of the binding table.
//! - Values are never logged, only field names and sources.

use serde::Serialize;

use super::env::{EnvSnapshot, ValueSource};
use super::error::ConfigError;
use crate::constants::REDACTED;
use crate::fields::{FieldSpec, fields_for};
use crate::profile::Profile;

/// A value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    pub value: String,
    pub source: ValueSource,
}

/// Outcome of resolving one field.
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    pub spec: FieldSpec,
    pub resolved: Option<ResolvedValue>,
}

impl ResolvedEntry {
    /// Value suitable for display: secrets are redacted, missing values are `None`.
    pub fn display_value(&self) -> Option<&str> {
        self.resolved.as_ref().map(|r| {
            if self.spec.secret {
                REDACTED
            } else {
                r.value.as_str()
            }
        })
    }
}

/// Serializable, redacted view of one entry.
#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    pub field: &'static str,
    pub env: &'static str,
    pub required: bool,
    pub value: Option<&'a str>,
    pub source: Option<ValueSource>,
}

impl<'a> From<&'a ResolvedEntry> for EntryView<'a> {
    fn from(entry: &'a ResolvedEntry) -> Self {
        Self {
            field: entry.spec.field,
            env: entry.spec.env,
            required: entry.spec.is_required(),
            value: entry.display_value(),
            source: entry.resolved.as_ref().map(|r| r.source),
        }
    }
}

/// Every field of a profile, resolved or not.
#[derive(Debug, Clone)]
pub struct Resolution {
    profile: Profile,
    entries: Vec<ResolvedEntry>,
}

impl Resolution {
    pub(crate) fn resolve(profile: Profile, snapshot: &EnvSnapshot) -> Self {
        let entries = fields_for(profile)
            .iter()
            .map(|spec| {
                let resolved = resolve_field(spec, snapshot);
                match &resolved {
                    Some(r) => tracing::debug!(field = spec.field, source = %r.source, "Resolved"),
                    None => tracing::debug!(field = spec.field, "Unresolved"),
                }
                ResolvedEntry {
                    spec: *spec,
                    resolved,
                }
            })
            .collect();
        Self { profile, entries }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn entries(&self) -> &[ResolvedEntry] {
        &self.entries
    }

    /// Env var names of required fields that could not be resolved.
    pub fn missing(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.resolved.is_none())
            .map(|e| e.spec.env.to_string())
            .collect()
    }

    /// Redacted views of all entries, for display.
    pub fn views(&self) -> Vec<EntryView<'_>> {
        self.entries.iter().map(EntryView::from).collect()
    }

    /// Fail with every missing field, or hand out the resolved values.
    pub(crate) fn into_fields(self) -> Result<ResolvedFields, ConfigError> {
        let missing = self.missing();
        if !missing.is_empty() {
            tracing::warn!(
                profile = %self.profile,
                missing = ?missing,
                "Required configuration is missing"
            );
            return Err(ConfigError::MissingRequiredConfiguration { fields: missing });
        }
        let values = self
            .entries
            .into_iter()
            .filter_map(|e| e.resolved.map(|r| (e.spec.env, r.value)))
            .collect();
        Ok(ResolvedFields { values })
    }
}

/// Resolved values keyed by env var name, consumed while building a record.
#[derive(Debug)]
pub(crate) struct ResolvedFields {
    values: Vec<(&'static str, String)>,
}

impl ResolvedFields {
    /// Take the value bound to `spec`.
    pub(crate) fn take(&mut self, spec: &FieldSpec) -> Result<String, ConfigError> {
        let idx = self
            .values
            .iter()
            .position(|(env, _)| *env == spec.env)
            .ok_or_else(|| ConfigError::MissingRequiredConfiguration {
                fields: vec![spec.env.to_string()],
            })?;
        Ok(self.values.swap_remove(idx).1)
    }
}

fn resolve_field(spec: &FieldSpec, snapshot: &EnvSnapshot) -> Option<ResolvedValue> {
    if let Some((value, source)) = snapshot.lookup(spec.env) {
        return Some(ResolvedValue { value, source });
    }
    spec.default.map(|default| ResolvedValue {
        value: default.to_string(),
        source: ValueSource::Default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::env::EnvLayer;

    fn snapshot(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot {
            process: EnvLayer::from_pairs(pairs.iter().copied()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_lists_all_required_in_table_order() {
        let resolution =
            Resolution::resolve(Profile::Aml, &snapshot(&[("AZURE_LOCATION", "eastus")]));
        assert_eq!(
            resolution.missing(),
            [
                "AZURE_SUBSCRIPTION_ID",
                "AZURE_RESOURCE_GROUP",
                "AZURE_ML_WORKSPACE",
                "ADLS_ACCOUNT_NAME",
                "ADLS_FILESYSTEM"
            ]
        );
    }

    #[test]
    fn test_defaults_fill_optional_fields() {
        let resolution = Resolution::resolve(Profile::Aml, &snapshot(&[]));
        let compute = resolution
            .entries()
            .iter()
            .find(|e| e.spec.env == "AML_COMPUTE_NAME")
            .unwrap();
        assert_eq!(
            compute.resolved,
            Some(ResolvedValue {
                value: "demo-azure-ml-prod-cpu-small".to_string(),
                source: ValueSource::Default,
            })
        );
    }

    #[test]
    fn test_secret_is_redacted_in_views() {
        let resolution = Resolution::resolve(
            Profile::Synapse,
            &snapshot(&[("SYNAPSE_SQL_ADMIN_PASSWORD", "hunter2")]),
        );
        let view = resolution
            .views()
            .into_iter()
            .find(|v| v.env == "SYNAPSE_SQL_ADMIN_PASSWORD")
            .unwrap();
        assert_eq!(view.value, Some(REDACTED));
        assert_eq!(view.source, Some(ValueSource::Env));
    }

    #[test]
    fn test_into_fields_reports_every_missing_field() {
        let err = Resolution::resolve(Profile::Synapse, &snapshot(&[]))
            .into_fields()
            .unwrap_err();
        assert_eq!(err.missing_fields().len(), 8);
    }
}
