//! Modules and generated projects.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A located module rules file (`<Module>.Build.cs`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleFile {
    path: PathBuf,
}

impl ModuleFile {
    /// Create a module handle from the path of its rules file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ModuleFile { path: path.into() }
    }

    /// Get the path of the rules file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the module directory.
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    /// Get the module name.
    pub fn name(&self) -> &str {
        bare_file_name(&self.path).unwrap_or_default()
    }
}

/// A module together with the files found below its directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredModule {
    pub module: ModuleFile,

    /// Absolute file paths, in discovery order
    pub files: Vec<PathBuf>,
}

impl DiscoveredModule {
    pub fn new(module: ModuleFile, files: Vec<PathBuf>) -> Self {
        DiscoveredModule { module, files }
    }
}

/// A buildable target of a generated project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTarget {
    /// Path of the `<Target>.Target.cs` file, if the target has one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl ProjectTarget {
    /// Create a target from its rules file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProjectTarget {
            path: Some(path.into()),
        }
    }

    /// Get the bare target name, with every extension removed.
    ///
    /// `UE4Editor.Target.cs` becomes `UE4Editor`.
    pub fn name(&self) -> Option<&str> {
        self.path.as_deref().and_then(bare_file_name)
    }
}

/// IntelliSense and target metadata of one generated project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedProject {
    /// Path of the project file; relative include paths resolve against its directory
    pub path: PathBuf,

    /// Include search paths reported for code completion
    #[serde(default)]
    pub include_paths: Vec<String>,

    /// Preprocessor definitions reported for code completion
    #[serde(default)]
    pub definitions: Vec<String>,

    /// Targets built by this project, in listed order
    #[serde(default)]
    pub targets: Vec<ProjectTarget>,
}

impl GeneratedProject {
    /// Create an empty project.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        GeneratedProject {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Add include search paths.
    pub fn include_paths(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.include_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add preprocessor definitions.
    pub fn definitions(mut self, defs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.definitions.extend(defs.into_iter().map(Into::into));
        self
    }

    /// Add a target.
    pub fn target(mut self, target: ProjectTarget) -> Self {
        self.targets.push(target);
        self
    }

    /// Get the directory containing the project file.
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }
}

/// File name up to its first `.`.
fn bare_file_name(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let bare = name.split('.').next().unwrap_or(name);
    if bare.is_empty() {
        None
    } else {
        Some(bare)
    }
}
