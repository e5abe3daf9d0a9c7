//! Configuration file support for cmakegen.
//!
//! cmakegen supports two configuration file locations:
//! - Global: `<config dir>/cmakegen/config.toml` - User-wide defaults
//! - Project: `CMakeGen.toml` - Per-checkout settings
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::core::{Configuration, GeneratedProject, HostPlatform};
use crate::util::fs::read_to_string;

/// File name of the project configuration.
pub const PROJECT_CONFIG_NAME: &str = "CMakeGen.toml";

/// cmakegen configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Engine settings
    pub engine: EngineConfig,

    /// Game project settings
    pub game: GameConfig,

    /// Generator settings
    pub generator: GeneratorConfig,

    /// Generated projects and their IntelliSense metadata
    #[serde(rename = "project", skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<GeneratedProject>,
}

/// Engine-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory containing `Engine/`
    pub root: Option<PathBuf>,
}

/// Game-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Path to the game's `.uproject` file
    pub project: Option<PathBuf>,
}

/// Generator-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Host platform override (defaults to the running host)
    pub platform: Option<HostPlatform>,

    /// Directory receiving `CMakeLists.txt`
    pub output_dir: Option<PathBuf>,

    /// Name used in the `project()` declaration
    pub project_name: Option<String>,

    /// Configurations valid for this installation
    pub configurations: Option<Vec<Configuration>>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.engine.root.is_some() {
            self.engine.root = other.engine.root;
        }
        if other.game.project.is_some() {
            self.game.project = other.game.project;
        }

        if other.generator.platform.is_some() {
            self.generator.platform = other.generator.platform;
        }
        if other.generator.output_dir.is_some() {
            self.generator.output_dir = other.generator.output_dir;
        }
        if other.generator.project_name.is_some() {
            self.generator.project_name = other.generator.project_name;
        }
        if other.generator.configurations.is_some() {
            self.generator.configurations = other.generator.configurations;
        }

        // Project lists replace, they never concatenate
        if !other.projects.is_empty() {
            self.projects = other.projects;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (CMakeGen.toml)
/// 2. Global config
/// 3. Defaults
///
/// A project config that exists but fails to parse is an error; a broken
/// global config only logs a warning.
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load(project_path)?);
    }

    Ok(config)
}

/// Get the global cmakegen config directory.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "cmakegen", "cmakegen").map(|d| d.config_dir().to_path_buf())
}

/// Get the global config path.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
[engine]
root = "/opt/UnrealEngine"

[game]
project = "/work/Shooter/Shooter.uproject"

[generator]
platform = "Linux"
project_name = "Shooter"
configurations = ["Debug", "Shipping"]

[[project]]
path = "Intermediate/ProjectFiles/UE4.vcxproj"
include_paths = ["../../Engine/Source/Runtime/Core/Public"]
definitions = ["WITH_EDITOR=1"]

[[project.targets]]
path = "Engine/Source/UE4Editor.Target.cs"

[[project.targets]]
"#,
        )
        .unwrap();

        assert_eq!(config.engine.root, Some(PathBuf::from("/opt/UnrealEngine")));
        assert_eq!(config.generator.platform, Some(HostPlatform::Linux));
        assert_eq!(
            config.generator.configurations,
            Some(vec![Configuration::Debug, Configuration::Shipping])
        );
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].targets.len(), 2);
        assert_eq!(config.projects[0].targets[0].name(), Some("UE4Editor"));
        assert_eq!(config.projects[0].targets[1].path, None);
    }

    #[test]
    fn test_project_overrides_global() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        let project = tmp.path().join(PROJECT_CONFIG_NAME);

        std::fs::write(
            &global,
            "[engine]\nroot = \"/global/ue\"\n[generator]\nproject_name = \"Global\"\n",
        )
        .unwrap();
        std::fs::write(&project, "[engine]\nroot = \"/project/ue\"\n").unwrap();

        let config = load_config(Some(&global), &project).unwrap();
        assert_eq!(config.engine.root, Some(PathBuf::from("/project/ue")));
        assert_eq!(config.generator.project_name.as_deref(), Some("Global"));
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(
            Some(&tmp.path().join("nope.toml")),
            &tmp.path().join(PROJECT_CONFIG_NAME),
        )
        .unwrap();
        assert!(config.engine.root.is_none());
        assert!(config.projects.is_empty());
    }

    #[test]
    fn test_broken_project_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join(PROJECT_CONFIG_NAME);
        std::fs::write(&project, "[engine\n").unwrap();

        assert!(load_config(None, &project).is_err());
    }
}
