// src/fs/mod.rs

//! Filesystem access used while locating the sbt launcher.
//!
//! Only the handful of queries the resolver needs are abstracted, so tests
//! can describe a PATH layout with [`mock::MockFileSystem`] instead of
//! touching the real disk.

use std::fmt::Debug;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

pub mod mock;

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    fn is_file(&self, path: &Path) -> bool;

    /// Directory that relative paths are resolved against.
    fn current_dir(&self) -> Result<PathBuf>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().context("reading current working directory")
    }
}

/// Make `path` absolute against the filesystem's current directory and
/// collapse `.` / `..` components lexically.
///
/// Symlinks are not followed and the path does not have to exist.
pub fn absolute_normalized(fs: &dyn FileSystem, path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match fs.current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    normalize_lexically(&absolute)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component.as_os_str());
                }
                // `..` directly under the root stays at the root.
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    #[test]
    fn collapses_dot_segments() {
        let fs = MockFileSystem::new();
        let p = absolute_normalized(&fs, Path::new("/opt/sbt/../sbt/./bin/./sbt"));
        assert_eq!(p, PathBuf::from("/opt/sbt/bin/sbt"));
    }

    #[test]
    fn relative_paths_resolve_against_current_dir() {
        let fs = MockFileSystem::with_current_dir("/work/project");
        let p = absolute_normalized(&fs, Path::new("tools/sbt/bin/./sbt"));
        assert_eq!(p, PathBuf::from("/work/project/tools/sbt/bin/sbt"));
    }

    #[test]
    fn parent_of_root_stays_root() {
        let fs = MockFileSystem::new();
        let p = absolute_normalized(&fs, Path::new("/../usr/bin"));
        assert_eq!(p, PathBuf::from("/usr/bin"));
    }
}
