//! Source/header/config bucketing of discovered files.

use std::path::Path;

use serde::Serialize;

use crate::core::DiscoveredModule;
use crate::generator::context::GeneratorContext;
use crate::generator::exclusion::is_excluded;
use crate::generator::paths::{engine_relative, normalize_file};

/// Category of a discovered file, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// `.cpp`
    Source,
    /// `.h`
    Header,
    /// `.cs` module and target rules
    Config,
}

impl FileCategory {
    /// Infer the category from a path. Matching is case-sensitive.
    pub fn from_path(path: &str) -> Option<Self> {
        if path.ends_with(".cpp") {
            Some(FileCategory::Source)
        } else if path.ends_with(".h") {
            Some(FileCategory::Header)
        } else if path.ends_with(".cs") {
            Some(FileCategory::Config)
        } else {
            None
        }
    }
}

/// Rewritten file paths, per category, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedFiles {
    pub sources: Vec<String>,
    pub headers: Vec<String>,
    pub configs: Vec<String>,
}

impl ClassifiedFiles {
    /// Append a rewritten path to its category.
    pub fn push(&mut self, category: FileCategory, path: String) {
        match category {
            FileCategory::Source => self.sources.push(path),
            FileCategory::Header => self.headers.push(path),
            FileCategory::Config => self.configs.push(path),
        }
    }

    /// Total number of classified files.
    pub fn len(&self) -> usize {
        self.sources.len() + self.headers.len() + self.configs.len()
    }

    /// Whether no file was classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify one file.
///
/// Returns `None` for files excluded on the host platform and for
/// extensions outside the three categories.
pub fn classify_file(file: &Path, ctx: &GeneratorContext) -> Option<(FileCategory, String)> {
    let rel = engine_relative(file, ctx.roots());

    if is_excluded(&rel, ctx.platform()) {
        tracing::trace!("excluded on {}: {}", ctx.platform(), rel);
        return None;
    }

    let category = FileCategory::from_path(&rel)?;
    Some((category, normalize_file(file, ctx.roots()).render()))
}

/// Classify every file of every module.
///
/// Order follows the input: modules in discovery order, then files in
/// discovery order within each module. Nothing is sorted here.
pub fn classify(modules: &[DiscoveredModule], ctx: &GeneratorContext) -> ClassifiedFiles {
    let mut classified = ClassifiedFiles::default();

    for discovered in modules {
        let before = classified.len();

        for file in &discovered.files {
            if let Some((category, path)) = classify_file(file, ctx) {
                classified.push(category, path);
            }
        }

        tracing::debug!(
            "module {}: {} of {} files classified",
            discovered.module.name(),
            classified.len() - before,
            discovered.files.len()
        );
    }

    classified
}
