//! Host operating system capability.
//!
//! Simulator inventories and the iOS parts of the guide only exist on
//! macOS. The host is passed explicitly so tests and `--host` can pick it.

use std::fmt;
use std::str::FromStr;

/// Operating system shotcheck is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HostPlatform {
    #[value(name = "macos")]
    MacOS,
    #[default]
    Linux,
    Windows,
}

impl HostPlatform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            HostPlatform::MacOS
        } else if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else {
            HostPlatform::Linux
        }
    }

    /// Whether iOS simulators can be used on this host.
    pub fn is_macos(&self) -> bool {
        matches!(self, HostPlatform::MacOS)
    }
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("BITRISE_IO").is_ok()
        || std::env::var("CM_BUILD").is_ok()
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostPlatform::MacOS => write!(f, "macos"),
            HostPlatform::Linux => write!(f, "linux"),
            HostPlatform::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for HostPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "macos" | "darwin" => Ok(Self::MacOS),
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("unknown host platform: {}", s)),
        }
    }
}
