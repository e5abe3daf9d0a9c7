//! Engine and game roots.
//!
//! Every discovered file resolves under the engine root or the game root.
//! Emitted paths refer to these roots through symbolic CMake variables so
//! the descriptor stays valid when the tree is moved.

use std::path::{Path, PathBuf};

use crate::generator::errors::GenerateError;

/// Variable holding the engine root in the descriptor.
pub const ENGINE_ROOT_TOKEN: &str = "${UE4_ROOT_PATH}";

/// Variable holding the game root in the descriptor.
pub const GAME_ROOT_TOKEN: &str = "${GAME_ROOT_PATH}";

/// Variable holding the game project file in the descriptor.
pub const GAME_PROJECT_FILE_TOKEN: &str = "${GAME_PROJECT_FILE}";

/// A game project described by its `.uproject` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProject {
    /// Project name (file stem of the project file)
    name: String,

    /// Absolute path of the project file
    project_file: PathBuf,

    /// Directory containing the project file
    root: PathBuf,
}

impl GameProject {
    /// Describe a game project from the path of its project file.
    pub fn from_project_file(project_file: impl Into<PathBuf>) -> Result<Self, GenerateError> {
        let project_file = project_file.into();

        let name = project_file
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or_else(|| GenerateError::InvalidGameProject(project_file.clone()))?;

        let root = project_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .ok_or_else(|| GenerateError::InvalidGameProject(project_file.clone()))?;

        Ok(GameProject {
            name,
            project_file,
            root,
        })
    }

    /// Get the project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the project file path.
    pub fn project_file(&self) -> &Path {
        &self.project_file
    }

    /// Get the game root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a bare target name builds this project.
    ///
    /// Both the game target and its editor variant qualify.
    pub fn owns_target(&self, target_name: &str) -> bool {
        target_name == self.name
            || target_name
                .strip_prefix(self.name.as_str())
                .is_some_and(|rest| rest == "Editor")
    }
}

/// The pair of roots a generation run resolves paths against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootContext {
    /// Directory that contains `Engine/`
    engine_root: PathBuf,

    /// Optional game project
    game: Option<GameProject>,
}

impl RootContext {
    /// Create a root context for an engine-only run.
    pub fn new(engine_root: impl Into<PathBuf>) -> Self {
        RootContext {
            engine_root: engine_root.into(),
            game: None,
        }
    }

    /// Attach a game project.
    pub fn with_game(mut self, game: GameProject) -> Self {
        self.game = Some(game);
        self
    }

    /// Get the engine root.
    pub fn engine_root(&self) -> &Path {
        &self.engine_root
    }

    /// Get the `Engine` directory below the engine root.
    pub fn engine_dir(&self) -> PathBuf {
        self.engine_root.join("Engine")
    }

    /// Get the game project, if one is configured.
    pub fn game(&self) -> Option<&GameProject> {
        self.game.as_ref()
    }
}
