// src/resolve/builder.rs

use std::collections::HashMap;

use crate::config::ConfigurationReader;
use crate::env::{EnvironmentProvider, ProcessEnvironment};
use crate::fs::{FileSystem, RealFileSystem};

use super::{ResolveOptions, ResolvedCommand, read_non_blank, resolve};

static PROCESS_ENVIRONMENT: ProcessEnvironment = ProcessEnvironment;
static REAL_FILE_SYSTEM: RealFileSystem = RealFileSystem;

/// Fluent resolver over a [`ConfigurationReader`].
///
/// Every `with_*` call takes the property *name* to read. The relative order
/// of [`with_sbt_version`](Self::with_sbt_version) and
/// [`with_additional_options`](Self::with_additional_options) decides the
/// order of their tokens; all other calls are order independent.
///
/// [`build`](Self::build) consumes the resolver, so one instance yields
/// exactly one command.
///
/// ```ignore
/// let command = CommandResolver::from_config(&config)
///     .with_environment(&env)
///     .with_sbt_home("SbtHome")
///     .with_sbt_version("SbtVersion")
///     .with_tasks("Tasks")
///     .with_additional_options("AdditionalOptions")
///     .build();
/// ```
pub struct CommandResolver<'a> {
    config: &'a dyn ConfigurationReader,
    environment: HashMap<String, String>,
    system: &'a dyn EnvironmentProvider,
    fs: &'a dyn FileSystem,
    options: ResolveOptions,
}

impl<'a> CommandResolver<'a> {
    /// Resolver backed by the real process environment and filesystem.
    pub fn from_config(config: &'a dyn ConfigurationReader) -> Self {
        Self {
            config,
            environment: HashMap::new(),
            system: &PROCESS_ENVIRONMENT,
            fs: &REAL_FILE_SYSTEM,
            options: ResolveOptions::default(),
        }
    }

    /// Execution environment used for `SBT_HOME`, `PATH` and `os.name`.
    pub fn with_environment(mut self, environment: &HashMap<String, String>) -> Self {
        self.environment = environment.clone();
        self
    }

    pub fn with_system(mut self, system: &'a dyn EnvironmentProvider) -> Self {
        self.system = system;
        self
    }

    pub fn with_file_system(mut self, fs: &'a dyn FileSystem) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_sbt_home(mut self, property: &str) -> Self {
        self.options.sbt_home = read_non_blank(self.config, property);
        self
    }

    pub fn with_sbt_version(mut self, property: &str) -> Self {
        let version = read_non_blank(self.config, property);
        self.options.push_version(version);
        self
    }

    pub fn with_tasks(mut self, property: &str) -> Self {
        let tasks = read_non_blank(self.config, property);
        self.options.push_tasks(tasks);
        self
    }

    pub fn with_additional_options(mut self, property: &str) -> Self {
        let additional = read_non_blank(self.config, property);
        self.options.push_additional(additional);
        self
    }

    /// Options collected so far.
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub fn build(self) -> ResolvedCommand {
        resolve(&self.options, &self.environment, self.system, self.fs)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::env::{PATH, StaticEnvironment};
    use crate::fs::mock::MockFileSystem;

    fn config(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn call_order_of_version_and_options_is_kept() {
        let cfg = config(&[("SbtVersion", "1.2.3"), ("AdditionalOptions", "-v")]);
        let fs = MockFileSystem::new();
        let system = StaticEnvironment::new("linux");

        let cmd = CommandResolver::from_config(&cfg)
            .with_system(&system)
            .with_file_system(&fs)
            .with_additional_options("AdditionalOptions")
            .with_sbt_version("SbtVersion")
            .build();

        assert_eq!(cmd.options(), ["-v", "-Dsbt.version=1.2.3"]);
    }

    #[test]
    fn missing_environment_is_empty() {
        let cfg = config(&[("Tasks", "compile")]);
        let fs = MockFileSystem::new();
        fs.add_file("/usr/local/bin/sbt");
        let system = StaticEnvironment::new("linux").with_var(PATH, "/usr/local/bin");

        let cmd = CommandResolver::from_config(&cfg)
            .with_system(&system)
            .with_file_system(&fs)
            .with_sbt_home("SbtHome")
            .with_tasks("Tasks")
            .build();

        assert_eq!(cmd.tokens(), ["/usr/local/bin/sbt", "compile"]);
    }

    #[test]
    fn from_config_reads_in_canonical_order() {
        let cfg = config(&[
            ("SbtVersion", "1.9.7"),
            ("AdditionalOptions", "-batch"),
            ("Tasks", "test"),
        ]);

        let fluent = CommandResolver::from_config(&cfg)
            .with_sbt_home("SbtHome")
            .with_sbt_version("SbtVersion")
            .with_tasks("Tasks")
            .with_additional_options("AdditionalOptions");

        assert_eq!(fluent.options(), &ResolveOptions::from_config(&cfg));
    }
}
