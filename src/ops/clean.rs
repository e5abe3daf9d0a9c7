//! Implementation of `cmakegen clean`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::generator::descriptor;
use crate::generator::DESCRIPTOR_FILE_NAME;

/// Result of a clean run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanResult {
    /// Path of the descriptor that was (or would have been) removed
    pub path: PathBuf,

    /// Whether a file was removed
    pub removed: bool,
}

/// Remove the descriptor from `output_dir`.
///
/// A missing descriptor is not an error.
pub fn clean(output_dir: &Path) -> Result<CleanResult> {
    let path = output_dir.join(DESCRIPTOR_FILE_NAME);
    let removed = descriptor::clean(output_dir)?;

    if removed {
        tracing::info!("Removed {}", path.display());
    } else {
        tracing::debug!("nothing to clean at {}", path.display());
    }

    Ok(CleanResult { path, removed })
}
