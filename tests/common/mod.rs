#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Write an executable `sh` script at `path`, creating parent directories.
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
    path.to_path_buf()
}

/// Lay out `<home>/bin/sbt` as a script that echoes its arguments one per
/// line and exits with `exit_code`.
#[cfg(unix)]
pub fn fake_sbt_home(home: &Path, exit_code: i32) -> PathBuf {
    write_script(
        &home.join("bin").join("sbt"),
        &format!("for arg in \"$@\"; do echo \"arg:$arg\"; done\necho \"cwd:$(pwd)\"\nexit {exit_code}"),
    )
}
