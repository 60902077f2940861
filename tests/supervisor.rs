// tests/supervisor.rs

#![cfg(unix)]

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use sbt_task::config::RawTaskConfig;
use sbt_task::exec::{self, FAILURE, SUCCESS};
use sbt_task::resolve::{ResolveOptions, ResolvedCommand, resolve};
use sbt_task::env::StaticEnvironment;
use sbt_task::fs::RealFileSystem;
use sbt_task_test_utils::console::{Recorded, RecordingConsole};
use sbt_task_test_utils::{init_tracing, with_timeout};

use crate::common::write_script;

/// Resolve a command whose executable is `script` under a fake sbt home.
fn command_for(home: &std::path::Path, args: &[&str]) -> ResolvedCommand {
    let options = ResolveOptions {
        sbt_home: Some(home.to_string_lossy().into_owned()),
        tasks: args.iter().map(|a| a.to_string()).collect(),
        ..Default::default()
    };
    resolve(
        &options,
        &HashMap::new(),
        &StaticEnvironment::new("linux"),
        &RealFileSystem,
    )
}

async fn run(
    command: &ResolvedCommand,
    dir: &std::path::Path,
    env: HashMap<String, String>,
) -> (exec::ExecutionResult, RecordingConsole) {
    let console = RecordingConsole::new();
    let result = with_timeout(exec::execute(command, dir, &env, Arc::new(console.clone()))).await;
    (result, console)
}

#[tokio::test]
async fn zero_exit_is_success() {
    init_tracing();
    let home = tempfile::tempdir().unwrap();
    write_script(&home.path().join("bin/sbt"), "exit 0");

    let (result, _) = run(&command_for(home.path(), &[]), home.path(), HashMap::new()).await;

    assert!(result.is_success());
    assert_eq!(result.message(), SUCCESS);
}

#[tokio::test]
async fn non_zero_exit_is_failure_without_cause() {
    init_tracing();
    let home = tempfile::tempdir().unwrap();
    write_script(&home.path().join("bin/sbt"), "echo compiling\nexit 1");

    let (result, console) =
        run(&command_for(home.path(), &[]), home.path(), HashMap::new()).await;

    assert!(!result.is_success());
    assert_eq!(result.message(), FAILURE);
    assert!(result.cause().is_none());
    assert!(console.diagnostics().is_empty());
    assert_eq!(console.stdout(), vec!["compiling"]);
}

#[tokio::test]
async fn missing_executable_is_failure_with_cause_and_diagnostics() {
    init_tracing();
    let home = tempfile::tempdir().unwrap();

    let (result, console) =
        run(&command_for(&home.path().join("nope"), &["compile"]), home.path(), HashMap::new())
            .await;

    assert!(!result.is_success());
    assert_eq!(result.message(), FAILURE);
    let cause = result.cause().expect("launch failure carries a cause");
    assert!(cause.to_string().contains("nope"));
    assert!(!console.diagnostics().is_empty());
    assert!(console.stdout().is_empty());
}

#[tokio::test]
async fn missing_working_directory_is_a_launch_failure() {
    init_tracing();
    let home = tempfile::tempdir().unwrap();
    write_script(&home.path().join("bin/sbt"), "exit 0");

    let (result, console) = run(
        &command_for(home.path(), &[]),
        &home.path().join("does-not-exist"),
        HashMap::new(),
    )
    .await;

    assert!(!result.is_success());
    assert!(result.cause().is_some());
    assert!(!console.diagnostics().is_empty());
}

#[tokio::test]
async fn every_line_of_both_streams_is_delivered() {
    init_tracing();
    let home = tempfile::tempdir().unwrap();
    write_script(
        &home.path().join("bin/sbt"),
        "i=0\nwhile [ $i -lt 500 ]; do echo \"out $i\"; echo \"err $i\" >&2; i=$((i+1)); done\necho tail >&2",
    );

    let (result, console) =
        run(&command_for(home.path(), &[]), home.path(), HashMap::new()).await;

    assert!(result.is_success());
    let out = console.stdout();
    let err = console.stderr();
    assert_eq!(out.len(), 500);
    assert_eq!(err.len(), 501);
    assert_eq!(console.lines().len(), 1001);

    // Order within one stream is preserved.
    let expected: Vec<String> = (0..500).map(|i| format!("out {i}")).collect();
    assert_eq!(out, expected);
    assert_eq!(err.last().map(String::as_str), Some("tail"));
}

#[tokio::test]
async fn runs_in_working_directory_with_merged_environment() {
    init_tracing();
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    write_script(
        &home.path().join("bin/sbt"),
        "pwd\necho \"custom=$SBT_TASK_TEST_VAR\"\nif [ -n \"$PATH\" ]; then echo inherited; fi",
    );

    let env = HashMap::from([("SBT_TASK_TEST_VAR".to_string(), "42".to_string())]);
    let (result, console) = run(&command_for(home.path(), &[]), work.path(), env).await;

    assert!(result.is_success());
    let out = console.stdout();
    assert_eq!(
        std::fs::canonicalize(&out[0]).unwrap(),
        std::fs::canonicalize(work.path()).unwrap()
    );
    assert_eq!(out[1], "custom=42");
    assert_eq!(out[2], "inherited");
}

#[tokio::test]
async fn arguments_are_passed_in_order() {
    init_tracing();
    let home = tempfile::tempdir().unwrap();
    common::fake_sbt_home(home.path(), 0);

    let raw = RawTaskConfig {
        sbt_version: Some("1.9.7".into()),
        additional_options: Some("-batch -Dx=1".into()),
        tasks: Some("clean test".into()),
        sbt_home: Some(home.path().to_string_lossy().into_owned()),
    };
    let options = ResolveOptions::from_config(&sbt_task::config::TaskConfig::try_from(raw).unwrap());
    let command = resolve(
        &options,
        &HashMap::new(),
        &StaticEnvironment::new("linux"),
        &RealFileSystem,
    );

    let (result, console) = run(&command, home.path(), HashMap::new()).await;

    assert!(result.is_success());
    let args: Vec<_> = console
        .lines()
        .into_iter()
        .filter_map(|l| match l {
            Recorded::Stdout(s) => s.strip_prefix("arg:").map(str::to_string),
            _ => None,
        })
        .collect();
    assert_eq!(args, ["-Dsbt.version=1.9.7", "-batch", "-Dx=1", "clean", "test"]);
}

#[tokio::test]
async fn killed_process_is_failure_without_cause() {
    init_tracing();
    let home = tempfile::tempdir().unwrap();
    write_script(&home.path().join("bin/sbt"), "kill -9 $$");

    let (result, _) = run(&command_for(home.path(), &[]), home.path(), HashMap::new()).await;

    assert!(!result.is_success());
    assert!(result.cause().is_none());
}
