// src/exec/executor.rs

//! Task executor abstraction.
//!
//! A host (or `main.rs`) talks to a `TaskExecutor` instead of calling the
//! resolver and supervisor directly. That keeps the seam where a test can
//! substitute a fake that never spawns a process.
//!
//! - `SbtTaskExecutor` is the production implementation: it resolves the sbt
//!   command from the task properties and supervises it.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use crate::config::{ConfigKey, ConfigurationReader};
use crate::env::{EnvironmentProvider, ProcessEnvironment};
use crate::exec::console::ConsoleSink;
use crate::exec::result::ExecutionResult;
use crate::exec::supervisor;
use crate::fs::{FileSystem, RealFileSystem};
use crate::resolve::{CommandResolver, ResolvedCommand};

/// Where and with which environment a task runs.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// Absolute path of an existing directory.
    pub working_directory: PathBuf,
    pub environment_variables: HashMap<String, String>,
}

impl ExecutionContext {
    pub fn new(
        working_directory: impl Into<PathBuf>,
        environment_variables: HashMap<String, String>,
    ) -> Self {
        Self {
            working_directory: working_directory.into(),
            environment_variables,
        }
    }

    /// Context whose environment is the current process environment with
    /// `overrides` layered on top.
    pub fn inherit_process_env(
        working_directory: impl Into<PathBuf>,
        overrides: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut environment_variables: HashMap<String, String> = std::env::vars().collect();
        environment_variables.extend(overrides);
        Self::new(working_directory, environment_variables)
    }
}

/// Trait abstracting how a configured task is executed.
pub trait TaskExecutor: Send + Sync {
    /// Run the task described by `config` in `context`, streaming output to
    /// `console`. Always produces a result; never an error.
    fn execute<'a>(
        &'a self,
        context: &'a ExecutionContext,
        config: &'a dyn ConfigurationReader,
        console: Arc<dyn ConsoleSink>,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>>;
}

/// Resolves and runs sbt.
#[derive(Debug, Clone)]
pub struct SbtTaskExecutor {
    system: Arc<dyn EnvironmentProvider>,
    fs: Arc<dyn FileSystem>,
}

impl Default for SbtTaskExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl SbtTaskExecutor {
    /// Executor backed by the real process environment and filesystem.
    pub fn new() -> Self {
        Self {
            system: Arc::new(ProcessEnvironment),
            fs: Arc::new(RealFileSystem),
        }
    }

    pub fn with_capabilities(
        system: Arc<dyn EnvironmentProvider>,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        Self { system, fs }
    }

    /// The command [`execute`](TaskExecutor::execute) would run.
    pub fn resolve(
        &self,
        context: &ExecutionContext,
        config: &dyn ConfigurationReader,
    ) -> ResolvedCommand {
        CommandResolver::from_config(config)
            .with_environment(&context.environment_variables)
            .with_system(self.system.as_ref())
            .with_file_system(self.fs.as_ref())
            .with_sbt_home(ConfigKey::SbtHome.property_name())
            .with_sbt_version(ConfigKey::SbtVersion.property_name())
            .with_tasks(ConfigKey::Tasks.property_name())
            .with_additional_options(ConfigKey::AdditionalOptions.property_name())
            .build()
    }
}

impl TaskExecutor for SbtTaskExecutor {
    fn execute<'a>(
        &'a self,
        context: &'a ExecutionContext,
        config: &'a dyn ConfigurationReader,
        console: Arc<dyn ConsoleSink>,
    ) -> Pin<Box<dyn Future<Output = ExecutionResult> + Send + 'a>> {
        Box::pin(async move {
            let command = self.resolve(context, config);
            debug!(command = %command, "executing command");

            supervisor::execute(
                &command,
                &context.working_directory,
                &context.environment_variables,
                console,
            )
            .await
        })
    }
}
