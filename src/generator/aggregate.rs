//! Include directory and preprocessor definition aggregation.
//!
//! Both sets are insertion-ordered: the first occurrence of an entry fixes
//! its position in the descriptor, later duplicates are dropped.
//!
//! Definitions that differ only in a trailing `=0`/`=1` collapse to
//! whichever form was seen first, so the descriptor never passes a flag
//! with both values.

use std::path::Path;

use indexmap::IndexSet;
use serde::Serialize;

use crate::core::GeneratedProject;
use crate::generator::context::GeneratorContext;
use crate::generator::paths::normalize_dir;
use crate::util::fs::{absolutize, clean_separators};

/// Definitions forced to a fixed value whatever IntelliSense reports.
const PINNED_DEFINITIONS: [(&str, &str); 2] = [
    ("WITH_EDITORONLY_DATA=0", "WITH_EDITORONLY_DATA=1"),
    ("WITH_DATABASE_SUPPORT=1", "WITH_DATABASE_SUPPORT=0"),
];

/// Definitions whose value changes per translation unit.
const VOLATILE_DEFINITION_PREFIXES: [&str; 2] = ["UE_ENGINE_DIRECTORY", "ORIGINAL_FILE_NAME"];

/// Aggregated include directories and definitions of all generated projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub includes: IndexSet<String>,
    pub definitions: IndexSet<String>,
}

impl Aggregate {
    /// Add an include search path reported by a project in `project_dir`.
    ///
    /// Returns `true` if the directory was not already present.
    pub fn add_include(&mut self, raw: &str, project_dir: &Path, ctx: &GeneratorContext) -> bool {
        let raw = raw.trim();
        if raw.is_empty() {
            return false;
        }

        let cleaned = clean_separators(raw);
        let dir = absolutize(Path::new(&cleaned), project_dir);
        let rendered = normalize_dir(&dir, ctx.roots()).render();

        self.includes.insert(rendered)
    }

    /// Add a preprocessor definition.
    ///
    /// Returns `true` if the definition (after pinning) was added.
    pub fn add_definition(&mut self, raw: &str) -> bool {
        let raw = raw.trim();
        if raw.is_empty() {
            return false;
        }

        if VOLATILE_DEFINITION_PREFIXES
            .iter()
            .any(|prefix| raw.starts_with(prefix))
        {
            tracing::trace!("skipping volatile definition {}", raw);
            return false;
        }

        let (literal, alternate) = match pinned_definition(raw) {
            Some(pinned) => (pinned.to_string(), Some(raw.to_string())),
            None => (raw.to_string(), alternate_definition(raw)),
        };

        if self.definitions.contains(&literal) {
            return false;
        }
        if let Some(alternate) = &alternate {
            if self.definitions.contains(alternate) {
                return false;
            }
        }

        self.definitions.insert(literal)
    }
}

/// Flip a trailing `=0` to `=1` and vice versa.
///
/// Definitions without a boolean-like value have no alternate.
pub fn alternate_definition(definition: &str) -> Option<String> {
    if let Some(name) = definition.strip_suffix("=0") {
        Some(format!("{}=1", name))
    } else {
        definition
            .strip_suffix("=1")
            .map(|name| format!("{}=0", name))
    }
}

fn pinned_definition(definition: &str) -> Option<&'static str> {
    PINNED_DEFINITIONS
        .iter()
        .find(|(reported, _)| *reported == definition)
        .map(|(_, pinned)| *pinned)
}

/// Aggregate the IntelliSense metadata of every project, in generation order.
pub fn aggregate(projects: &[GeneratedProject], ctx: &GeneratorContext) -> Aggregate {
    let mut aggregate = Aggregate::default();

    for project in projects {
        let project_dir = absolutize(project.directory(), ctx.roots().engine_root());

        for include in &project.include_paths {
            aggregate.add_include(include, &project_dir, ctx);
        }
        for definition in &project.definitions {
            aggregate.add_definition(definition);
        }
    }

    tracing::debug!(
        "aggregated {} include directories and {} definitions from {} projects",
        aggregate.includes.len(),
        aggregate.definitions.len(),
        projects.len()
    );

    aggregate
}
