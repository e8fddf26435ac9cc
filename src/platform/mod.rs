//! Host platform identification for asset selection.

use std::str::FromStr;

use crate::error::FetchError;

/// Operating systems that ship a prebuilt binary with each release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Identify the platform this build is running on.
    pub fn detect() -> Result<Self, FetchError> {
        Self::from_os_tag(std::env::consts::OS)
    }

    /// Parse an OS tag, as reported by the toolchain or given on the command line.
    pub fn from_os_tag(tag: &str) -> Result<Self, FetchError> {
        match tag.to_ascii_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::MacOs),
            "windows" => Ok(Platform::Windows),
            _ => Err(FetchError::UnsupportedPlatform(tag.to_string())),
        }
    }

    /// Windows installs differ in two ways: the `.exe` suffix and no chmod step.
    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
        };
        write!(f, "{}", tag)
    }
}

impl FromStr for Platform {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_os_tag(s)
    }
}
