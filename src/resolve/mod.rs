// src/resolve/mod.rs

//! Turning task properties into a concrete sbt invocation.
//!
//! The work happens in [`resolve`], a pure function over an immutable
//! [`ResolveOptions`] record, the execution environment, and two injected
//! capabilities ([`EnvironmentProvider`] and [`FileSystem`]).
//! [`CommandResolver`] is the fluent front end that collects the options from
//! a [`ConfigurationReader`](crate::config::ConfigurationReader).
//!
//! - [`platform`] knows the launcher names per OS family.
//! - [`search`] walks `PATH` when no sbt home is configured.
//! - [`builder`] holds the fluent resolver.

pub mod builder;
pub mod platform;
pub mod search;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{ConfigKey, ConfigurationReader};
use crate::env::{self, EnvironmentProvider, SBT_HOME};
use crate::fs::{FileSystem, absolute_normalized};

pub use builder::CommandResolver;
pub use platform::OsFamily;

/// A fully resolved sbt command line: `[executable, options.., tasks..]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    executable: String,
    options: Vec<String>,
    tasks: Vec<String>,
}

impl ResolvedCommand {
    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    /// Everything after the executable, options first.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .chain(self.tasks.iter())
            .map(String::as_str)
    }

    /// All tokens in launch order. Never empty.
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(self.executable.as_str())
            .chain(self.args())
            .map(str::to_string)
            .collect()
    }
}

impl fmt::Display for ResolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable)?;
        for arg in self.args() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Everything the resolver takes from the task configuration.
///
/// `options` is already in final order; the version flag, when present, is
/// expected first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    pub sbt_home: Option<String>,
    pub options: Vec<String>,
    pub tasks: Vec<String>,
}

impl ResolveOptions {
    /// Read all recognised properties in their canonical order.
    pub fn from_config(config: &dyn ConfigurationReader) -> Self {
        let mut options = ResolveOptions {
            sbt_home: read_non_blank(config, ConfigKey::SbtHome.property_name()),
            ..Default::default()
        };
        options.push_version(read_non_blank(config, ConfigKey::SbtVersion.property_name()));
        options.push_additional(read_non_blank(
            config,
            ConfigKey::AdditionalOptions.property_name(),
        ));
        options.push_tasks(read_non_blank(config, ConfigKey::Tasks.property_name()));
        options
    }

    pub(crate) fn push_version(&mut self, version: Option<String>) {
        if let Some(version) = version {
            self.options.push(version_option(&version));
        }
    }

    pub(crate) fn push_additional(&mut self, additional: Option<String>) {
        if let Some(additional) = additional {
            self.options.extend(split_tokens(&additional));
        }
    }

    pub(crate) fn push_tasks(&mut self, tasks: Option<String>) {
        if let Some(tasks) = tasks {
            self.tasks.extend(split_tokens(&tasks));
        }
    }
}

/// The `-D` flag that pins the sbt version.
pub fn version_option(version: &str) -> String {
    format!("-Dsbt.version={version}")
}

/// Split on runs of whitespace, dropping empty tokens.
pub fn split_tokens(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

pub(crate) fn read_non_blank(config: &dyn ConfigurationReader, name: &str) -> Option<String> {
    config
        .property(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Compute the sbt command line.
///
/// 1. The OS family comes from the `os.name` entry of `env` if present,
///    otherwise from `system`.
/// 2. The sbt home is `options.sbt_home`, else a non-blank `SBT_HOME` in
///    `env`.
/// 3. With a home, the executable is `<home>/bin/<launcher>`, absolute and
///    normalized, existing or not. Without one, `PATH` is searched and the
///    bare launcher name is the last resort.
///
/// Never fails: missing configuration only makes the command shorter.
pub fn resolve(
    options: &ResolveOptions,
    env: &HashMap<String, String>,
    system: &dyn EnvironmentProvider,
    fs: &dyn FileSystem,
) -> ResolvedCommand {
    let family = OsFamily::from_os_name(&env::os_name(env, system));
    let launcher = family.launcher();

    let executable = match sbt_home(options, env) {
        Some(home) => {
            absolute_normalized(fs, &Path::new(&home).join(platform::SBT_BIN).join(launcher))
        }
        None => search::find_on_path(launcher, env, system, fs)
            .unwrap_or_else(|| PathBuf::from(launcher)),
    };
    let executable = executable.to_string_lossy().into_owned();

    debug!(?family, executable = %executable, "resolved sbt executable");

    ResolvedCommand {
        executable,
        options: options.options.clone(),
        tasks: options.tasks.clone(),
    }
}

fn sbt_home(options: &ResolveOptions, env: &HashMap<String, String>) -> Option<String> {
    options.sbt_home.clone().or_else(|| {
        env.get(SBT_HOME)
            .map(|home| home.trim().to_string())
            .filter(|home| !home.is_empty())
    })
}
