//! Generated project metadata.

use anyhow::Result;

use crate::core::{GeneratedProject, ProjectTarget, RootContext};
use crate::sources::{PathSource, ProjectSource};

/// Projects declared up front, typically in `CMakeGen.toml`.
#[derive(Debug, Clone, Default)]
pub struct DeclaredProjects {
    projects: Vec<GeneratedProject>,
}

impl DeclaredProjects {
    pub fn new(projects: Vec<GeneratedProject>) -> Self {
        DeclaredProjects { projects }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectSource for DeclaredProjects {
    fn projects(&self, _roots: &RootContext) -> Result<Vec<GeneratedProject>> {
        Ok(self.projects.clone())
    }
}

/// One project per discovered `*.Target.cs`, without IntelliSense metadata.
///
/// Used when no projects are declared: the descriptor still lists every
/// source file and gets build rules for every target.
#[derive(Debug, Clone, Default)]
pub struct TargetProjects {
    source: PathSource,
}

impl TargetProjects {
    pub fn new() -> Self {
        TargetProjects {
            source: PathSource::new(),
        }
    }
}

impl ProjectSource for TargetProjects {
    fn projects(&self, roots: &RootContext) -> Result<Vec<GeneratedProject>> {
        let projects = self
            .source
            .discover_targets(roots)?
            .into_iter()
            .map(|target| GeneratedProject::new(target.clone()).target(ProjectTarget::new(target)))
            .collect();

        Ok(projects)
    }
}
