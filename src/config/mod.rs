// src/config/mod.rs

//! Task configuration for sbt-task.
//!
//! Responsibilities:
//! - Name the recognised properties and their external names (`model.rs`).
//! - Load a TOML task file from disk (`loader.rs`).
//! - Check required properties before anything runs (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigKey, ConfigurationReader, RawTaskConfig, TaskConfig};
