// src/exec/console.rs

//! Where process output goes.

use std::io::{self, Write};

/// Destination for the build's output lines and for diagnostics.
///
/// Implementations are shared between the stdout and stderr drains, so they
/// must tolerate calls from two tasks at once. Lines arrive without their
/// trailing newline.
pub trait ConsoleSink: Send + Sync {
    /// A line the process wrote to stdout.
    fn stdout_line(&self, line: &str);

    /// A line the process wrote to stderr.
    fn stderr_line(&self, line: &str);

    /// A diagnostic line produced by the supervisor itself.
    fn print_line(&self, line: &str);
}

/// Forwards process stdout to our stdout, everything else to our stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl ConsoleSink for StdConsole {
    fn stdout_line(&self, line: &str) {
        // A closed stdout (e.g. `| head`) must not abort supervision.
        let _ = writeln!(io::stdout().lock(), "{line}");
    }

    fn stderr_line(&self, line: &str) {
        let _ = writeln!(io::stderr().lock(), "{line}");
    }

    fn print_line(&self, line: &str) {
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}
