//! Collaborator traits - how the generator learns about the build graph.
//!
//! Generation itself never walks the filesystem. Discovery of modules,
//! enumeration of their files and the IntelliSense metadata of generated
//! projects all arrive through these traits.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::{GeneratedProject, ModuleFile, RootContext};

/// Locates the module rules files of a project set.
pub trait ModuleDiscovery {
    /// Discover modules below the engine and game roots.
    ///
    /// The returned order must be deterministic; it becomes the order of
    /// the descriptor's file lists.
    fn discover_modules(&self, roots: &RootContext) -> Result<Vec<ModuleFile>>;
}

/// Enumerates the files belonging to a module.
pub trait SourceFileSearch {
    /// Find every candidate file of `module`, as absolute paths in a
    /// deterministic order.
    fn find_module_source_files(&self, module: &ModuleFile) -> Result<Vec<PathBuf>>;
}

/// Supplies the generated projects and their IntelliSense metadata.
pub trait ProjectSource {
    /// Get the projects in generation order.
    fn projects(&self, roots: &RootContext) -> Result<Vec<GeneratedProject>>;
}
