//! Host platform identity.
//!
//! The host platform decides two things for a generation run: the shell
//! command that invokes the build driver, and which source folders are
//! hidden from the descriptor (see `generator::exclusion`).

use serde::{Deserialize, Serialize};

/// Platform the generator runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostPlatform {
    Win32,
    Win64,
    Mac,
    Linux,
    Android,
    #[serde(rename = "IOS", alias = "iOS")]
    Ios,
}

impl HostPlatform {
    /// Every known platform, in declaration order.
    pub const ALL: [HostPlatform; 6] = [
        HostPlatform::Win32,
        HostPlatform::Win64,
        HostPlatform::Mac,
        HostPlatform::Linux,
        HostPlatform::Android,
        HostPlatform::Ios,
    ];

    /// Detect the platform of the running process.
    ///
    /// Returns `None` on operating systems that have no platform entry.
    pub fn current() -> Option<Self> {
        match std::env::consts::OS {
            "windows" => Some(HostPlatform::Win64),
            "macos" => Some(HostPlatform::Mac),
            "linux" => Some(HostPlatform::Linux),
            "android" => Some(HostPlatform::Android),
            "ios" => Some(HostPlatform::Ios),
            _ => None,
        }
    }

    /// Get the platform name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HostPlatform::Win32 => "Win32",
            HostPlatform::Win64 => "Win64",
            HostPlatform::Mac => "Mac",
            HostPlatform::Linux => "Linux",
            HostPlatform::Android => "Android",
            HostPlatform::Ios => "IOS",
        }
    }

    /// Architecture label passed to the build driver.
    ///
    /// Only platforms that can host a generation run have one.
    pub fn host_architecture(&self) -> Option<&'static str> {
        match self {
            HostPlatform::Win64 | HostPlatform::Mac | HostPlatform::Linux => Some(self.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HostPlatform {
    type Err = HostPlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "win32" => Ok(HostPlatform::Win32),
            "win64" | "windows" => Ok(HostPlatform::Win64),
            "mac" | "macos" => Ok(HostPlatform::Mac),
            "linux" => Ok(HostPlatform::Linux),
            "android" => Ok(HostPlatform::Android),
            "ios" => Ok(HostPlatform::Ios),
            _ => Err(HostPlatformParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown platform name.
#[derive(Debug, Clone)]
pub struct HostPlatformParseError(pub String);

impl std::fmt::Display for HostPlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid platform '{}', valid values: Win32, Win64, Mac, Linux, Android, IOS",
            self.0
        )
    }
}

impl std::error::Error for HostPlatformParseError {}
