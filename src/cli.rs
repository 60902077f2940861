// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::config::RawTaskConfig;

/// Command-line arguments for `sbt-task`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sbt-task",
    version,
    about = "Resolve and run an sbt build, streaming its output.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task file (TOML).
    ///
    /// Default: `SbtTask.toml` in the working directory, if it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Directory sbt runs in. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub working_dir: Option<String>,

    /// Extra environment variable for the build, layered over the current
    /// environment. May be repeated.
    #[arg(long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,

    /// sbt installation directory (overrides `SbtHome`).
    #[arg(long, value_name = "DIR")]
    pub sbt_home: Option<String>,

    /// sbt version to force (overrides `SbtVersion`).
    #[arg(long, value_name = "VERSION")]
    pub sbt_version: Option<String>,

    /// Tasks to run, whitespace separated (overrides `Tasks`).
    #[arg(long, value_name = "TASKS")]
    pub tasks: Option<String>,

    /// Additional sbt options (overrides `AdditionalOptions`).
    #[arg(long, value_name = "OPTIONS", allow_hyphen_values = true)]
    pub options: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SBT_TASK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the command, but don't run it.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Task properties given on the command line.
    pub fn property_overrides(&self) -> RawTaskConfig {
        RawTaskConfig {
            sbt_home: self.sbt_home.clone(),
            sbt_version: self.sbt_version.clone(),
            tasks: self.tasks.clone(),
            additional_options: self.options.clone(),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
