// src/resolve/platform.rs

//! OS family detection and the matching sbt launcher name.

/// Launcher script used on every non-Windows host.
pub const SBT_UNIX: &str = "./sbt";

/// Launcher script used on Windows hosts.
pub const SBT_WINDOWS: &str = "./sbt.bat";

/// Directory under the sbt home that holds the launchers.
pub const SBT_BIN: &str = "bin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Unix,
}

impl OsFamily {
    /// Any OS name containing "win" (case-insensitive) is Windows.
    pub fn from_os_name(name: &str) -> Self {
        if name.to_lowercase().contains("win") {
            OsFamily::Windows
        } else {
            OsFamily::Unix
        }
    }

    pub fn launcher(self) -> &'static str {
        match self {
            OsFamily::Windows => SBT_WINDOWS,
            OsFamily::Unix => SBT_UNIX,
        }
    }
}
