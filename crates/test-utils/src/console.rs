use std::sync::{Arc, Mutex};

use sbt_task::exec::ConsoleSink;

/// Which channel a recorded line arrived on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Stdout(String),
    Stderr(String),
    Diagnostic(String),
}

/// A console sink that remembers every line, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    lines: Arc<Mutex<Vec<Recorded>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<Recorded> {
        self.lines.lock().unwrap().clone()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.filter(|r| match r {
            Recorded::Stdout(l) => Some(l.clone()),
            _ => None,
        })
    }

    pub fn stderr(&self) -> Vec<String> {
        self.filter(|r| match r {
            Recorded::Stderr(l) => Some(l.clone()),
            _ => None,
        })
    }

    pub fn diagnostics(&self) -> Vec<String> {
        self.filter(|r| match r {
            Recorded::Diagnostic(l) => Some(l.clone()),
            _ => None,
        })
    }

    fn filter(&self, f: impl Fn(&Recorded) -> Option<String>) -> Vec<String> {
        self.lines.lock().unwrap().iter().filter_map(f).collect()
    }

    fn push(&self, line: Recorded) {
        self.lines.lock().unwrap().push(line);
    }
}

impl ConsoleSink for RecordingConsole {
    fn stdout_line(&self, line: &str) {
        self.push(Recorded::Stdout(line.to_string()));
    }

    fn stderr_line(&self, line: &str) {
        self.push(Recorded::Stderr(line.to_string()));
    }

    fn print_line(&self, line: &str) {
        self.push(Recorded::Diagnostic(line.to_string()));
    }
}
