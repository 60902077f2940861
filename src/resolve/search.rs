// src/resolve/search.rs

//! `PATH` lookup for the sbt launcher.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::env::{self, EnvironmentProvider, PATH};
use crate::fs::{FileSystem, absolute_normalized};

/// Find the first `PATH` entry that contains a file named `launcher`.
///
/// `PATH` comes from the execution environment, falling back to the process
/// environment. Only the presence of a regular file is checked; the
/// executable bit is left to the OS when the process is launched.
///
/// Returns the absolute, normalized path of the match, or `None` when `PATH`
/// is blank or no entry matches.
pub fn find_on_path(
    launcher: &str,
    env: &HashMap<String, String>,
    system: &dyn EnvironmentProvider,
    fs: &dyn FileSystem,
) -> Option<PathBuf> {
    let search_path = env::lookup(env, system, PATH)?;
    if search_path.trim().is_empty() {
        debug!("PATH is empty; not searching for {launcher}");
        return None;
    }

    for dir in std::env::split_paths(&search_path) {
        let candidate = dir.join(launcher);
        trace!(candidate = %candidate.display(), "probing for sbt launcher");
        if fs.is_file(&candidate) {
            let found = absolute_normalized(fs, &candidate);
            debug!(path = %found.display(), "found sbt launcher on PATH");
            return Some(found);
        }
    }

    debug!("{launcher} not found on PATH");
    None
}
