//! Test fixtures for common test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::{GameProject, RootContext};

/// A temporary engine checkout, optionally with a game project beside it.
///
/// The temporary directory is the engine root; the game project (if any)
/// lives in `<root>/<GameName>/<GameName>.uproject`.
#[derive(Debug)]
pub struct EngineFixture {
    dir: TempDir,
    game: Option<String>,
}

impl EngineFixture {
    /// Create an empty engine tree (just `Engine/`).
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Engine")).unwrap();
        EngineFixture { dir, game: None }
    }

    /// Get the engine root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Resolve a path relative to the engine root.
    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write a file relative to the engine root.
    pub fn file(self, rel: impl AsRef<Path>, contents: &str) -> Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    /// Add a module rules file `<dir>/<name>.Build.cs`.
    pub fn module(self, dir: &str, name: &str) -> Self {
        let rules = format!("{dir}/{name}.Build.cs");
        self.file(rules, &format!("public class {name} : ModuleRules {{ }}\n"))
    }

    /// Add a target rules file `<dir>/<name>.Target.cs`.
    pub fn target(self, dir: &str, name: &str) -> Self {
        let rules = format!("{dir}/{name}.Target.cs");
        self.file(rules, &format!("public class {name}Target : TargetRules {{ }}\n"))
    }

    /// Add a game project `<name>/<name>.uproject`.
    pub fn with_game(mut self, name: &str) -> Self {
        let uproject = format!("{name}/{name}.uproject");
        self = self.file(uproject, "{ \"FileVersion\": 3 }\n");
        self.game = Some(name.to_string());
        self
    }

    /// Get the game project file, if a game was added.
    pub fn game_project_file(&self) -> Option<PathBuf> {
        self.game
            .as_ref()
            .map(|name| self.path(format!("{name}/{name}.uproject")))
    }

    /// Build the root context for this tree.
    pub fn roots(&self) -> RootContext {
        let roots = RootContext::new(self.root());
        match self.game_project_file() {
            Some(file) => roots.with_game(GameProject::from_project_file(file).unwrap()),
            None => roots,
        }
    }
}

impl Default for EngineFixture {
    fn default() -> Self {
        Self::new()
    }
}
