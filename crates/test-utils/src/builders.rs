#![allow(dead_code)]

use std::collections::HashMap;

use sbt_task::config::{ConfigKey, RawTaskConfig, TaskConfig};
use sbt_task::env::{OS_NAME, PATH, SBT_HOME};

/// Builder for task properties keyed by their external names.
///
/// `build()` gives a plain property map (usable as a `ConfigurationReader`),
/// `build_validated()` goes through the same validation as a task file.
#[derive(Debug, Default)]
pub struct TaskPropertiesBuilder {
    raw: RawTaskConfig,
}

impl TaskPropertiesBuilder {
    pub fn new(tasks: &str) -> Self {
        Self {
            raw: RawTaskConfig {
                tasks: Some(tasks.to_string()),
                ..Default::default()
            },
        }
    }

    pub fn sbt_home(mut self, home: &str) -> Self {
        self.raw.sbt_home = Some(home.to_string());
        self
    }

    pub fn sbt_version(mut self, version: &str) -> Self {
        self.raw.sbt_version = Some(version.to_string());
        self
    }

    pub fn additional_options(mut self, options: &str) -> Self {
        self.raw.additional_options = Some(options.to_string());
        self
    }

    pub fn build(self) -> HashMap<String, String> {
        ConfigKey::ALL
            .into_iter()
            .filter_map(|key| {
                self.raw
                    .get(key)
                    .map(|v| (key.property_name().to_string(), v.to_string()))
            })
            .collect()
    }

    pub fn build_validated(self) -> TaskConfig {
        TaskConfig::try_from(self.raw).expect("Failed to build valid task config from builder")
    }
}

/// Builder for the execution environment handed to the resolver.
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    vars: HashMap<String, String>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn sbt_home(self, home: &str) -> Self {
        self.var(SBT_HOME, home)
    }

    pub fn path(self, path: &str) -> Self {
        self.var(PATH, path)
    }

    pub fn os_name(self, name: &str) -> Self {
        self.var(OS_NAME, name)
    }

    pub fn build(self) -> HashMap<String, String> {
        self.vars
    }
}
