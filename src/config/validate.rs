// src/config/validate.rs

use crate::config::model::{ConfigKey, RawTaskConfig, TaskConfig};
use crate::errors::{Result, SbtTaskError};

impl TryFrom<RawTaskConfig> for TaskConfig {
    type Error = SbtTaskError;

    fn try_from(raw: RawTaskConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(TaskConfig::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawTaskConfig) -> Result<()> {
    ensure_required_properties(cfg)?;
    ensure_single_line_values(cfg)?;
    Ok(())
}

fn ensure_required_properties(cfg: &RawTaskConfig) -> Result<()> {
    for key in ConfigKey::ALL.into_iter().filter(|k| k.is_required()) {
        let present = cfg.get(key).is_some_and(|v| !v.trim().is_empty());
        if !present {
            return Err(SbtTaskError::MissingProperty(
                key.property_name().to_string(),
            ));
        }
    }
    Ok(())
}

fn ensure_single_line_values(cfg: &RawTaskConfig) -> Result<()> {
    // Home and version end up inside a single token, so a newline there is
    // always a typo rather than a separator.
    for key in [ConfigKey::SbtHome, ConfigKey::SbtVersion] {
        if let Some(value) = cfg.get(key) {
            if value.trim().contains(['\n', '\r']) {
                return Err(SbtTaskError::ConfigError(format!(
                    "property '{}' must be a single line",
                    key.property_name()
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(tasks: Option<&str>) -> RawTaskConfig {
        RawTaskConfig {
            tasks: tasks.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn tasks_are_required() {
        assert!(matches!(
            TaskConfig::try_from(raw(None)),
            Err(SbtTaskError::MissingProperty(name)) if name == "Tasks"
        ));
        assert!(matches!(
            TaskConfig::try_from(raw(Some("  \t "))),
            Err(SbtTaskError::MissingProperty(_))
        ));
        assert!(TaskConfig::try_from(raw(Some("compile"))).is_ok());
    }

    #[test]
    fn multi_line_version_is_rejected() {
        let cfg = RawTaskConfig {
            sbt_version: Some("1.9.7\n1.8.0".into()),
            ..raw(Some("compile"))
        };
        assert!(matches!(
            TaskConfig::try_from(cfg),
            Err(SbtTaskError::ConfigError(msg)) if msg.contains("SbtVersion")
        ));
    }
}
