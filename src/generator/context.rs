//! Generator context - roots, platform, and output configuration.

use std::path::{Path, PathBuf};

use crate::core::{Configuration, HostPlatform, RootContext};
use crate::generator::errors::GenerateError;

/// Name used in the `project()` declaration when none is configured.
pub const DEFAULT_PROJECT_NAME: &str = "UE4";

/// Immutable settings threaded through every stage of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    /// Engine and game roots
    roots: RootContext,

    /// Platform the descriptor is generated for
    platform: HostPlatform,

    /// Directory receiving the descriptor
    master_project_dir: PathBuf,

    /// Name used in the `project()` declaration
    project_name: String,

    /// Configurations valid for this installation
    configurations: Vec<Configuration>,
}

impl GeneratorContext {
    /// Create a context with default settings.
    ///
    /// The descriptor goes to the game root when a game project is
    /// configured, otherwise to the engine root.
    pub fn new(roots: RootContext, platform: HostPlatform) -> Self {
        let master_project_dir = roots
            .game()
            .map(|g| g.root().to_path_buf())
            .unwrap_or_else(|| roots.engine_root().to_path_buf());

        GeneratorContext {
            roots,
            platform,
            master_project_dir,
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            configurations: Configuration::ALL.to_vec(),
        }
    }

    /// Set the directory receiving the descriptor.
    pub fn with_master_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.master_project_dir = dir.into();
        self
    }

    /// Set the `project()` name.
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    /// Restrict the valid configurations.
    pub fn with_configurations(mut self, configurations: Vec<Configuration>) -> Self {
        self.configurations = configurations;
        self
    }

    /// Get the roots.
    pub fn roots(&self) -> &RootContext {
        &self.roots
    }

    /// Get the host platform.
    pub fn platform(&self) -> HostPlatform {
        self.platform
    }

    /// Get the master project directory.
    pub fn master_project_dir(&self) -> &Path {
        &self.master_project_dir
    }

    /// Get the `project()` name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Architecture label passed to the build driver.
    pub fn host_architecture(&self) -> Result<&'static str, GenerateError> {
        self.platform
            .host_architecture()
            .ok_or(GenerateError::UnsupportedPlatform(self.platform))
    }

    /// Whether the build driver accepts this configuration here.
    pub fn is_valid_configuration(&self, configuration: Configuration) -> bool {
        self.configurations.contains(&configuration)
    }
}
