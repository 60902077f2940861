// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{RawTaskConfig, TaskConfig};
use crate::errors::Result;

/// Load a task file from a given path and return the raw `RawTaskConfig`.
///
/// This only performs TOML deserialization; it does **not** check required
/// properties. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTaskConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawTaskConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a task file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TaskConfig> {
    let raw_config = load_from_path(&path)?;
    let config = TaskConfig::try_from(raw_config)?;
    Ok(config)
}

/// Task file looked up in the working directory when `--config` is not given.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("SbtTask.toml")
}
