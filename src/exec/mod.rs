// src/exec/mod.rs

//! Process execution layer.
//!
//! This module actually runs sbt, using `tokio::process::Command`, and
//! reports the outcome as an [`ExecutionResult`].
//!
//! - [`supervisor`] launches one resolved command and drains its output.
//! - [`console`] defines the `ConsoleSink` output lines are forwarded to.
//! - [`result`] holds the two-variant `ExecutionResult`.
//! - [`executor`] provides the `TaskExecutor` trait and the concrete
//!   `SbtTaskExecutor` that ties resolution and supervision together.

pub mod console;
pub mod executor;
pub mod result;
pub mod supervisor;

pub use console::{ConsoleSink, StdConsole};
pub use executor::{ExecutionContext, SbtTaskExecutor, TaskExecutor};
pub use result::{ExecutionResult, FAILURE, SUCCESS};
pub use supervisor::execute;
