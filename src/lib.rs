// src/lib.rs

pub mod cli;
pub mod config;
pub mod env;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod resolve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{RawTaskConfig, TaskConfig, default_config_path, load_from_path};
use crate::exec::{ExecutionContext, ExecutionResult, SbtTaskExecutor, StdConsole, TaskExecutor};
use crate::fs::{RealFileSystem, absolute_normalized};
use crate::resolve::ResolvedCommand;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - task file loading + CLI overrides
/// - the execution context (working dir + environment)
/// - command resolution
/// - process supervision with output streamed to the terminal
pub async fn run(args: CliArgs) -> Result<ExecutionResult> {
    let working_dir = working_dir(&args)?;
    let config = load_task_config(&args, &working_dir)?;
    let context = ExecutionContext::inherit_process_env(working_dir.clone(), args.env.clone());
    let executor = SbtTaskExecutor::new();

    if args.dry_run {
        let command = executor.resolve(&context, &config);
        print_dry_run(&context, &command);
        return Ok(ExecutionResult::success("Dry run"));
    }

    let result = executor
        .execute(&context, &config, Arc::new(StdConsole))
        .await;

    info!(
        success = result.is_success(),
        message = result.message(),
        "sbt task finished"
    );
    Ok(result)
}

fn working_dir(args: &CliArgs) -> Result<PathBuf> {
    let dir = match &args.working_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    Ok(absolute_normalized(&RealFileSystem, &dir))
}

/// Task file (explicit, or the default one if present) with CLI flags on top.
fn load_task_config(args: &CliArgs, working_dir: &Path) -> Result<TaskConfig> {
    let base = match &args.config {
        Some(path) => load_from_path(path)?,
        None => {
            let path = working_dir.join(default_config_path());
            if path.is_file() {
                debug!(path = %path.display(), "using default task file");
                load_from_path(&path)?
            } else {
                RawTaskConfig::default()
            }
        }
    };

    let config = TaskConfig::try_from(base.overlay(args.property_overrides()))?;
    Ok(config)
}

/// Simple dry-run output: print where and what would run.
fn print_dry_run(context: &ExecutionContext, command: &ResolvedCommand) {
    println!("sbt-task dry-run");
    println!("  working_dir: {}", context.working_directory.display());
    println!("  executable: {}", command.executable());
    if !command.options().is_empty() {
        println!("  options: {:?}", command.options());
    }
    println!("  tasks: {:?}", command.tasks());
    println!();
    println!("{command}");

    debug!("dry-run complete (no execution)");
}
