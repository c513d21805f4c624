//! Settings profiles.
//!
//! A deployment uses exactly one profile. The Azure ML profile carries the
//! compute/image settings and derived repository paths; the Synapse profile
//! carries the SQL admin credentials instead.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::loader::ConfigError;

/// Which settings record to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Azure ML training/runtime settings with derived paths.
    Aml,
    /// Synapse workspace settings with SQL admin credentials.
    Synapse,
}

impl Profile {
    /// All profiles, in display order.
    pub const ALL: [Profile; 2] = [Profile::Aml, Profile::Synapse];

    /// Canonical lower-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Profile::Aml => "aml",
            Profile::Synapse => "synapse",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Profile::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownProfile(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("AML".parse::<Profile>().unwrap(), Profile::Aml);
        assert_eq!(" Synapse ".parse::<Profile>().unwrap(), Profile::Synapse);
    }

    #[test]
    fn test_parse_unknown_profile() {
        let err = "databricks".parse::<Profile>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile(ref p) if p == "databricks"));
    }

    #[test]
    fn test_display_round_trips() {
        for profile in Profile::ALL {
            assert_eq!(profile.to_string().parse::<Profile>().unwrap(), profile);
        }
    }
}
