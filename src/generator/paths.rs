//! Root-relative path rewriting.
//!
//! Discovered files are expressed relative to the engine or game root
//! through the symbolic variables of [`crate::core::roots`], with `/` as
//! the only separator.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::core::roots::{ENGINE_ROOT_TOKEN, GAME_ROOT_TOKEN};
use crate::core::RootContext;
use crate::util::fs::{clean_separators, is_inside, relative_path};

/// Root a rewritten path is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Relative to `${UE4_ROOT_PATH}`
    Engine,
    /// Relative to `${GAME_ROOT_PATH}`
    Game,
    /// Emitted verbatim
    Bare,
}

/// A path rewritten against one of the roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootedPath {
    pub anchor: Anchor,
    pub path: String,
}

impl RootedPath {
    fn new(anchor: Anchor, path: impl AsRef<str>) -> Self {
        RootedPath {
            anchor,
            path: clean_separators(path.as_ref()),
        }
    }

    /// Render the path as it appears in the descriptor.
    pub fn render(&self) -> String {
        let token = match self.anchor {
            Anchor::Engine => ENGINE_ROOT_TOKEN,
            Anchor::Game => GAME_ROOT_TOKEN,
            Anchor::Bare => return self.path.clone(),
        };

        if self.path.is_empty() {
            token.to_string()
        } else {
            format!("{}/{}", token, self.path)
        }
    }
}

impl fmt::Display for RootedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Path of `file` relative to `<engine root>/Engine`, `/`-separated.
///
/// Falls back to the absolute path when no relative form exists.
pub fn engine_relative(file: &Path, roots: &RootContext) -> String {
    let rel = relative_path(&roots.engine_dir(), file).unwrap_or_else(|| file.to_path_buf());
    clean_separators(&rel.to_string_lossy())
}

/// Whether an engine-relative path stays inside the engine directory.
fn is_under_engine(rel: &str) -> bool {
    !rel.starts_with("..") && !Path::new(rel).is_absolute() && !rel.starts_with('/')
}

/// Rewrite a discovered file.
///
/// Files below `<engine root>/Engine` are anchored at the engine root.
/// Anything else is anchored at the game root when a game project is
/// configured; without one, the leading `../` is dropped so the path is
/// relative to the engine root, which is where the descriptor lives.
pub fn normalize_file(file: &Path, roots: &RootContext) -> RootedPath {
    let rel = engine_relative(file, roots);

    if is_under_engine(&rel) {
        return RootedPath::new(Anchor::Engine, format!("Engine/{}", rel));
    }

    match roots.game() {
        Some(game) => match relative_path(game.root(), file) {
            Some(game_rel) => RootedPath::new(Anchor::Game, game_rel.to_string_lossy()),
            None => RootedPath::new(Anchor::Bare, file.to_string_lossy()),
        },
        None => match rel.strip_prefix("../") {
            Some(stripped) => RootedPath::new(Anchor::Bare, stripped),
            None => RootedPath::new(Anchor::Bare, rel),
        },
    }
}

/// Rewrite an absolute, normalized directory.
///
/// Directories outside both roots stay absolute.
pub fn normalize_dir(dir: &Path, roots: &RootContext) -> RootedPath {
    let rooted = if is_inside(dir, roots.engine_root()) {
        dir.strip_prefix(roots.engine_root())
            .ok()
            .map(|rel| RootedPath::new(Anchor::Engine, rel.to_string_lossy()))
    } else {
        roots.game().and_then(|game| {
            dir.strip_prefix(game.root())
                .ok()
                .map(|rel| RootedPath::new(Anchor::Game, rel.to_string_lossy()))
        })
    };

    let mut rooted =
        rooted.unwrap_or_else(|| RootedPath::new(Anchor::Bare, dir.to_string_lossy()));

    while rooted.path.len() > 1 && rooted.path.ends_with('/') {
        rooted.path.pop();
    }
    rooted
}
