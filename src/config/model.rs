// src/config/model.rs

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

/// Recognised task properties.
///
/// Each key maps to the fixed external name a host (or the TOML task file)
/// uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// The sbt installation directory.
    SbtHome,
    /// The sbt version to force via `-Dsbt.version`.
    SbtVersion,
    /// Whitespace separated sbt tasks (goals) to run.
    Tasks,
    /// Extra command line options passed to sbt.
    AdditionalOptions,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::SbtHome,
        ConfigKey::SbtVersion,
        ConfigKey::Tasks,
        ConfigKey::AdditionalOptions,
    ];

    /// External property name.
    pub fn property_name(self) -> &'static str {
        match self {
            ConfigKey::SbtHome => "SbtHome",
            ConfigKey::SbtVersion => "SbtVersion",
            ConfigKey::Tasks => "Tasks",
            ConfigKey::AdditionalOptions => "AdditionalOptions",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, ConfigKey::Tasks)
    }

    pub fn from_property_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.property_name() == name)
    }
}

/// Read access to task properties by external name.
///
/// This is all the resolver needs from whatever stores the configuration.
pub trait ConfigurationReader: Send + Sync {
    /// Value of the named property, or `None` when it is not set.
    fn property(&self, name: &str) -> Option<String>;
}

impl ConfigurationReader for HashMap<String, String> {
    fn property(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl ConfigurationReader for BTreeMap<String, String> {
    fn property(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Task properties as read from a TOML task file.
///
/// ```toml
/// SbtHome = "/opt/sbt"
/// SbtVersion = "1.9.7"
/// Tasks = "clean compile test"
/// AdditionalOptions = "-Xmx1G -Dfile.encoding=UTF-8"
/// ```
///
/// Nothing is validated here; see [`TaskConfig`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RawTaskConfig {
    #[serde(rename = "SbtHome", default)]
    pub sbt_home: Option<String>,

    #[serde(rename = "SbtVersion", default)]
    pub sbt_version: Option<String>,

    #[serde(rename = "Tasks", default)]
    pub tasks: Option<String>,

    #[serde(rename = "AdditionalOptions", default)]
    pub additional_options: Option<String>,
}

impl RawTaskConfig {
    /// Layer `overrides` on top of `self`; any value set in `overrides` wins.
    pub fn overlay(self, overrides: RawTaskConfig) -> RawTaskConfig {
        RawTaskConfig {
            sbt_home: overrides.sbt_home.or(self.sbt_home),
            sbt_version: overrides.sbt_version.or(self.sbt_version),
            tasks: overrides.tasks.or(self.tasks),
            additional_options: overrides.additional_options.or(self.additional_options),
        }
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::SbtHome => self.sbt_home.as_deref(),
            ConfigKey::SbtVersion => self.sbt_version.as_deref(),
            ConfigKey::Tasks => self.tasks.as_deref(),
            ConfigKey::AdditionalOptions => self.additional_options.as_deref(),
        }
    }
}

/// Validated task configuration.
///
/// Built from a [`RawTaskConfig`] through `TryFrom`, which guarantees the
/// required `Tasks` property is present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskConfig {
    raw: RawTaskConfig,
}

impl TaskConfig {
    pub(crate) fn new_unchecked(raw: RawTaskConfig) -> Self {
        Self { raw }
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.raw.get(key)
    }

    pub fn tasks(&self) -> &str {
        self.raw.tasks.as_deref().unwrap_or_default()
    }
}

impl ConfigurationReader for TaskConfig {
    fn property(&self, name: &str) -> Option<String> {
        ConfigKey::from_property_name(name)
            .and_then(|key| self.get(key))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_names_round_trip_through_the_table() {
        for key in ConfigKey::ALL {
            assert_eq!(ConfigKey::from_property_name(key.property_name()), Some(key));
        }
        assert_eq!(ConfigKey::from_property_name("sbtHome"), None);
        assert!(ConfigKey::Tasks.is_required());
        assert!(!ConfigKey::SbtHome.is_required());
    }

    #[test]
    fn overlay_prefers_overrides() {
        let base = RawTaskConfig {
            sbt_home: Some("/opt/sbt".into()),
            tasks: Some("compile".into()),
            ..Default::default()
        };
        let overrides = RawTaskConfig {
            tasks: Some("test".into()),
            sbt_version: Some("1.9.7".into()),
            ..Default::default()
        };

        let merged = base.overlay(overrides);
        assert_eq!(merged.get(ConfigKey::SbtHome), Some("/opt/sbt"));
        assert_eq!(merged.get(ConfigKey::Tasks), Some("test"));
        assert_eq!(merged.get(ConfigKey::SbtVersion), Some("1.9.7"));
        assert_eq!(merged.get(ConfigKey::AdditionalOptions), None);
    }

    #[test]
    fn task_config_reads_by_external_name() {
        let cfg = TaskConfig::new_unchecked(RawTaskConfig {
            tasks: Some("clean compile".into()),
            ..Default::default()
        });
        assert_eq!(cfg.property("Tasks").as_deref(), Some("clean compile"));
        assert_eq!(cfg.property("SbtVersion"), None);
        assert_eq!(cfg.property("Unknown"), None);
    }
}
