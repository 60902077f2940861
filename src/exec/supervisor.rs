// src/exec/supervisor.rs

//! Runs a resolved sbt command and reduces it to an [`ExecutionResult`].

use std::collections::HashMap;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;

use anyhow::{Context, anyhow};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::exec::console::ConsoleSink;
use crate::exec::result::{ExecutionResult, FAILURE, SUCCESS};
use crate::resolve::ResolvedCommand;

/// How supervision of one process ended.
#[derive(Debug)]
enum Termination {
    /// The process ran to completion.
    Completed(ExitStatus),
    /// The process never started.
    LaunchFailed(anyhow::Error),
    /// The process started but could not be supervised to the end.
    RunFailed(anyhow::Error),
}

#[derive(Debug, Clone, Copy)]
enum OutputStream {
    Stdout,
    Stderr,
}

impl OutputStream {
    fn name(self) -> &'static str {
        match self {
            OutputStream::Stdout => "stdout",
            OutputStream::Stderr => "stderr",
        }
    }
}

/// Run `command` in `working_dir` and wait for it to exit.
///
/// `environment` is layered over the inherited environment. Both output
/// streams are forwarded line by line to `console` while the process runs,
/// and both are fully drained before this returns.
///
/// Never returns an error: launch and IO problems become a
/// [`ExecutionResult::Failure`] carrying the cause, after the cause has been
/// written to `console`. The child is killed if this future is dropped
/// before the process exits.
pub async fn execute(
    command: &ResolvedCommand,
    working_dir: &Path,
    environment: &HashMap<String, String>,
    console: Arc<dyn ConsoleSink>,
) -> ExecutionResult {
    match supervise(command, working_dir, environment, &console).await {
        Termination::Completed(status) => {
            let code = status.code().unwrap_or(-1);
            info!(
                command = %command,
                exit_code = code,
                success = status.success(),
                "sbt process exited"
            );
            if status.success() {
                ExecutionResult::success(SUCCESS)
            } else {
                ExecutionResult::failure(FAILURE)
            }
        }
        Termination::LaunchFailed(err) | Termination::RunFailed(err) => {
            error!(command = %command, error = %err, "build failed with error");
            report_error(console.as_ref(), &err);
            ExecutionResult::failure_with_cause(FAILURE, err)
        }
    }
}

async fn supervise(
    command: &ResolvedCommand,
    working_dir: &Path,
    environment: &HashMap<String, String>,
    console: &Arc<dyn ConsoleSink>,
) -> Termination {
    info!(
        command = %command,
        working_dir = %working_dir.display(),
        "starting sbt process"
    );

    let mut cmd = Command::new(command.executable());
    cmd.args(command.args())
        .current_dir(working_dir)
        .envs(environment)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = match cmd.spawn().with_context(|| {
        format!(
            "starting `{}` in {}",
            command.executable(),
            working_dir.display()
        )
    }) {
        Ok(child) => child,
        Err(err) => return Termination::LaunchFailed(err),
    };

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        // `child` is dropped here, which kills it.
        return Termination::RunFailed(anyhow!("output pipes of the sbt process were not captured"));
    };

    let stdout_drain = spawn_drain(stdout, OutputStream::Stdout, Arc::clone(console));
    let stderr_drain = spawn_drain(stderr, OutputStream::Stderr, Arc::clone(console));

    let waited = child
        .wait()
        .await
        .context("waiting for the sbt process to exit");

    if waited.is_err() {
        // Without this the drains could wait forever on a live process.
        if let Err(e) = child.start_kill() {
            warn!(error = %e, "failed to kill sbt process after wait error");
        }
    }

    let (out, err) = tokio::join!(stdout_drain, stderr_drain);
    finish_drain(OutputStream::Stdout, out);
    finish_drain(OutputStream::Stderr, err);

    match waited {
        Ok(status) => Termination::Completed(status),
        Err(err) => Termination::RunFailed(err),
    }
}

/// Forward every line of `reader` to the console until EOF.
///
/// Bytes that are not valid UTF-8 are replaced rather than ending the drain.
fn spawn_drain<R>(
    reader: R,
    stream: OutputStream,
    console: Arc<dyn ConsoleSink>,
) -> JoinHandle<std::io::Result<usize>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        let mut count = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            match stream {
                OutputStream::Stdout => console.stdout_line(line),
                OutputStream::Stderr => console.stderr_line(line),
            }
            count += 1;
        }

        Ok(count)
    })
}

fn finish_drain(
    stream: OutputStream,
    joined: Result<std::io::Result<usize>, tokio::task::JoinError>,
) {
    match joined {
        Ok(Ok(lines)) => debug!(stream = stream.name(), lines, "output stream drained"),
        Ok(Err(e)) => warn!(stream = stream.name(), error = %e, "reading process output failed"),
        Err(e) => warn!(stream = stream.name(), error = %e, "output drain task did not finish"),
    }
}

/// Write the error message, then the full report (cause chain and, when
/// captured, the backtrace).
fn report_error(console: &dyn ConsoleSink, err: &anyhow::Error) {
    console.print_line(&err.to_string());
    for line in format!("{err:?}").lines() {
        console.print_line(line);
    }
}
