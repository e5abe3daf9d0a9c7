//! Path source - module discovery on the local filesystem.
//!
//! Directory walks are sorted by file name so discovery order, and with it
//! the descriptor, is stable across runs and machines.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

use crate::core::{ModuleFile, RootContext};
use crate::sources::{ModuleDiscovery, SourceFileSearch};

/// Suffix of module rules files.
pub const MODULE_RULES_SUFFIX: &str = ".Build.cs";

/// Suffix of target rules files.
pub const TARGET_RULES_SUFFIX: &str = ".Target.cs";

/// Directories holding build products rather than sources.
const SKIPPED_DIRS: [&str; 2] = ["Intermediate", "Binaries"];

/// Discovers modules and their files by walking the engine and game trees.
#[derive(Debug, Clone, Default)]
pub struct PathSource;

impl PathSource {
    /// Create a new path source.
    pub fn new() -> Self {
        PathSource
    }

    /// Directories searched for module rules, in search order.
    pub fn module_roots(roots: &RootContext) -> Vec<PathBuf> {
        let engine_dir = roots.engine_dir();
        let mut dirs = vec![engine_dir.join("Source"), engine_dir.join("Plugins")];

        if let Some(game) = roots.game() {
            dirs.push(game.root().join("Source"));
            dirs.push(game.root().join("Plugins"));
        }

        dirs
    }

    /// Directories searched for target rules, in search order.
    pub fn target_roots(roots: &RootContext) -> Vec<PathBuf> {
        let mut dirs = vec![roots.engine_dir().join("Source")];

        if let Some(game) = roots.game() {
            dirs.push(game.root().join("Source"));
        }

        dirs
    }

    /// Find every `*.Target.cs` file below the target roots.
    pub fn discover_targets(&self, roots: &RootContext) -> Result<Vec<PathBuf>> {
        let mut targets = Vec::new();

        for dir in Self::target_roots(roots) {
            let found = walk_files(&dir, |_| true)?;
            targets.extend(
                found
                    .into_iter()
                    .filter(|p| has_suffix(p, TARGET_RULES_SUFFIX)),
            );
        }

        tracing::debug!("discovered {} targets", targets.len());
        Ok(targets)
    }
}

impl ModuleDiscovery for PathSource {
    fn discover_modules(&self, roots: &RootContext) -> Result<Vec<ModuleFile>> {
        let mut modules = Vec::new();

        for dir in Self::module_roots(roots) {
            let found = walk_files(&dir, |_| true)?;
            modules.extend(
                found
                    .into_iter()
                    .filter(|p| has_suffix(p, MODULE_RULES_SUFFIX))
                    .map(ModuleFile::new),
            );
        }

        tracing::debug!("discovered {} modules", modules.len());
        Ok(modules)
    }
}

impl SourceFileSearch for PathSource {
    fn find_module_source_files(&self, module: &ModuleFile) -> Result<Vec<PathBuf>> {
        // Nested modules own their own directories
        walk_files(module.directory(), |entry| {
            entry.depth() == 0 || !entry.file_type().is_dir() || !contains_module_rules(entry.path())
        })
    }
}

/// Walk `root` in file-name order, returning regular files.
///
/// Hidden directories and build-product directories are never entered;
/// `keep` can prune further directories. A missing root yields nothing.
fn walk_files(root: &Path, mut keep: impl FnMut(&DirEntry) -> bool) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry) && keep(entry));

    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

fn contains_module_rules(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .any(|e| has_suffix(&e.path(), MODULE_RULES_SUFFIX))
        })
        .unwrap_or(false)
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(suffix))
}
