//! Global context for cmakegen operations.
//!
//! Provides centralized access to the working directory and the
//! configuration file locations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config::{self, Config, PROJECT_CONFIG_NAME};
use crate::util::fs::absolutize;

/// Global context containing paths and environment.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Explicit project config file, overriding `CMakeGen.toml` lookup
    config_override: Option<PathBuf>,

    /// Whether to use verbose output
    verbose: bool,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;

        Ok(GlobalContext {
            cwd,
            config_override: None,
            verbose: false,
        })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        GlobalContext {
            cwd,
            config_override: None,
            verbose: false,
        }
    }

    /// Use an explicit project config file.
    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path.map(|p| self.resolve(&p));
        self
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Whether verbose output is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Make a user-supplied path absolute against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        absolutize(path, &self.cwd)
    }

    /// Get the project configuration file path.
    pub fn project_config_path(&self) -> PathBuf {
        self.config_override
            .clone()
            .unwrap_or_else(|| self.cwd.join(PROJECT_CONFIG_NAME))
    }

    /// Get the global configuration file path.
    pub fn global_config_path(&self) -> Option<PathBuf> {
        config::global_config_path()
    }

    /// Load the merged global + project configuration.
    pub fn load_config(&self) -> Result<Config> {
        let project_path = self.project_config_path();
        if self.config_override.is_some() && !project_path.exists() {
            anyhow::bail!("config file not found: {}", project_path.display());
        }

        config::load_config(self.global_config_path().as_deref(), &project_path)
    }
}
