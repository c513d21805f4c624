//! Environment variable sources for settings resolution.
//!
//! Responsibilities:
//! - Capture the process environment, `.env` entries, and explicit overrides as layers.
//! - Look up a variable case-insensitively across the layers in precedence order.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Reading the `.env` file from disk (see dotenv.rs).
//! - Deciding which variables a profile needs (see fields.rs).
//!
//! Invariants:
//! - Layer precedence: overrides > process environment > `.env` file.
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Within one layer, an exact upper-case name beats other spellings; other
//!   spellings are ordered lexicographically.
//! - The process environment is only read, never written.

use serde::Serialize;
use std::fmt;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// Set explicitly on the loader (e.g. `--set KEY=VALUE`).
    Override,
    /// Read from the process environment.
    Env,
    /// Read from the `.env` file.
    Dotenv,
    /// Compile-time default of the field.
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueSource::Override => "override",
            ValueSource::Env => "env",
            ValueSource::Dotenv => "dotenv",
            ValueSource::Default => "default",
        };
        f.write_str(label)
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub(crate) fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(normalize)
}

fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        // No trimming needed, return original to avoid allocation
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// One layer of variables.
#[derive(Clone, Default)]
pub(crate) struct EnvLayer {
    vars: Vec<(String, String)>,
}

// Values may be secrets; only names are printed.
impl fmt::Debug for EnvLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.vars.iter().map(|(k, _)| k))
            .finish()
    }
}

impl EnvLayer {
    pub(crate) fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub(crate) fn from_process() -> Self {
        let mut skipped = 0usize;
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| match (k.into_string(), v.into_string()) {
                (Ok(k), Ok(v)) => Some((k, v)),
                _ => {
                    skipped += 1;
                    None
                }
            })
            .collect();
        if skipped > 0 {
            tracing::debug!(skipped, "Ignoring non UTF-8 environment variables");
        }
        Self { vars }
    }

    pub(crate) fn push(&mut self, key: String, value: String) {
        self.vars.push((key, value));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Case-insensitive lookup of a non-empty value.
    pub(crate) fn lookup(&self, name: &str) -> Option<String> {
        let mut candidates: Vec<(&str, String)> = self
            .vars
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .filter_map(|(k, v)| normalize(v.clone()).map(|v| (k.as_str(), v)))
            .collect();

        // Later entries of the same exact name replace earlier ones.
        candidates.reverse();
        candidates.sort_by(|(a, _), (b, _)| {
            let a_exact = *a == name;
            let b_exact = *b == name;
            b_exact.cmp(&a_exact).then_with(|| a.cmp(b))
        });

        let mut iter = candidates.into_iter();
        let (chosen_name, value) = iter.next()?;
        let conflicting: Vec<&str> = iter
            .filter(|(k, v)| *k != chosen_name && *v != value)
            .map(|(k, _)| k)
            .collect();
        if !conflicting.is_empty() {
            tracing::warn!(
                var = name,
                chosen = chosen_name,
                ignored = ?conflicting,
                "Variable set under several spellings with different values"
            );
        }
        Some(value)
    }
}

/// The layered set of variables settings are resolved from.
#[derive(Debug, Clone, Default)]
pub(crate) struct EnvSnapshot {
    pub(crate) overrides: EnvLayer,
    pub(crate) process: EnvLayer,
    pub(crate) dotenv: EnvLayer,
}

impl EnvSnapshot {
    /// Look up `name` in precedence order.
    pub(crate) fn lookup(&self, name: &str) -> Option<(String, ValueSource)> {
        if let Some(value) = self.overrides.lookup(name) {
            return Some((value, ValueSource::Override));
        }
        if let Some(value) = self.process.lookup(name) {
            return Some((value, ValueSource::Env));
        }
        self.dotenv
            .lookup(name)
            .map(|value| (value, ValueSource::Dotenv))
    }
}
