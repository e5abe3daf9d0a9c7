//! Generation error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::HostPlatform;

/// Error that aborts a generation run before anything is written.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("cmakegen does not support generating on {0}")]
    UnsupportedPlatform(HostPlatform),

    #[error("engine directory not found: {}", .0.display())]
    MissingEngineDir(PathBuf),

    #[error("invalid game project file: {}", .0.display())]
    InvalidGameProject(PathBuf),
}
