//! Serializing the whole key set, for handing the configuration to other tools.

use miette::{Context, IntoDiagnostic, Result};
use serde::{Serialize, Serializer};

use crate::configuration::Configuration;


/// Serializes as a map from attribute name to value, in key order.
struct ConfigurationEntries<'a> {
    configuration: &'a Configuration,
    skip_absent: bool,
}

impl Serialize for ConfigurationEntries<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(
            self.configuration
                .entries()
                .filter(|(_, value)| !(self.skip_absent && value.is_absent()))
                .map(|(key, value)| (key.name(), value)),
        )
    }
}


/// Pretty-printed JSON object of every key; unset optional keys are `null`.
pub fn to_json_string(configuration: &Configuration) -> Result<String> {
    serde_json::to_string_pretty(&ConfigurationEntries {
        configuration,
        skip_absent: false,
    })
    .into_diagnostic()
    .wrap_err("Failed to serialize configuration as JSON.")
}

/// TOML document of every key; unset optional keys are left out.
pub fn to_toml_string(configuration: &Configuration) -> Result<String> {
    toml::to_string_pretty(&ConfigurationEntries {
        configuration,
        skip_absent: true,
    })
    .into_diagnostic()
    .wrap_err("Failed to serialize configuration as TOML.")
}
