// src/env.rs

//! Ambient process state the resolver is allowed to consult.
//!
//! The resolver never calls `std::env` directly. It goes through an
//! [`EnvironmentProvider`], so tests can pin `PATH` and the OS name to fixed
//! values while production uses [`ProcessEnvironment`].

use std::collections::HashMap;
use std::fmt::Debug;

/// Environment variable naming the sbt installation directory.
pub const SBT_HOME: &str = "SBT_HOME";

/// Executable search path.
pub const PATH: &str = "PATH";

/// Key in the execution environment that overrides the detected OS name.
pub const OS_NAME: &str = "os.name";

/// Source of process-level environment values and the host OS identity.
pub trait EnvironmentProvider: Send + Sync + Debug {
    /// Value of an environment variable of the supervising process.
    fn var(&self, key: &str) -> Option<String>;

    /// Name of the host operating system, e.g. `"linux"` or `"windows"`.
    fn os_name(&self) -> String;
}

/// The real environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentProvider for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn os_name(&self) -> String {
        std::env::consts::OS.to_string()
    }
}

/// Fixed environment, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
    os_name: String,
}

impl StaticEnvironment {
    pub fn new(os_name: impl Into<String>) -> Self {
        Self {
            vars: HashMap::new(),
            os_name: os_name.into(),
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvironmentProvider for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn os_name(&self) -> String {
        self.os_name.clone()
    }
}

/// Look `key` up in the execution environment, falling back to the process
/// environment when the key is absent.
///
/// Presence is what matters: an empty value in `env` still shadows the
/// process value.
pub fn lookup(
    env: &HashMap<String, String>,
    system: &dyn EnvironmentProvider,
    key: &str,
) -> Option<String> {
    match env.get(key) {
        Some(value) => Some(value.clone()),
        None => system.var(key),
    }
}

/// OS name, with the execution environment's `os.name` entry taking
/// precedence over the real host identity.
pub fn os_name(env: &HashMap<String, String>, system: &dyn EnvironmentProvider) -> String {
    env.get(OS_NAME)
        .cloned()
        .unwrap_or_else(|| system.os_name())
}
