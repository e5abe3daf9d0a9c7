//! Descriptor assembly and writing.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::core::HostPlatform;
use crate::generator::aggregate::Aggregate;
use crate::generator::classify::ClassifiedFiles;
use crate::generator::context::GeneratorContext;
use crate::generator::errors::GenerateError;
use crate::generator::targets::BuildRule;
use crate::util::fs::{clean_separators, remove_file_if_exists, write_if_changed};

/// File name of the generated descriptor.
pub const DESCRIPTOR_FILE_NAME: &str = "CMakeLists.txt";

const SECTION_END: &str = " )\n\n";

/// `set(BUILD ...)` line invoking the build driver on `platform`.
pub fn build_command(platform: HostPlatform) -> Result<String, GenerateError> {
    match platform {
        HostPlatform::Win64 => Ok(
            "set(BUILD cmd /c \"${UE4_ROOT_PATH}/Engine/Build/BatchFiles/Build.bat\")\n"
                .to_string(),
        ),
        HostPlatform::Mac | HostPlatform::Linux => Ok(format!(
            "set(BUILD cd \"${{UE4_ROOT_PATH}}\" && bash \"${{UE4_ROOT_PATH}}/Engine/Build/BatchFiles/{}/Build.sh\")\n",
            platform
        )),
        other => Err(GenerateError::UnsupportedPlatform(other)),
    }
}

/// Game project variables of the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameVariables {
    pub project_file: String,
    pub root: String,
}

/// The complete descriptor, held in memory until written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub project_name: String,
    pub engine_root: String,
    pub game: Option<GameVariables>,
    pub build_command: String,
    pub files: ClassifiedFiles,
    pub aggregate: Aggregate,
    pub rules: Vec<BuildRule>,
}

impl Descriptor {
    /// Assemble a descriptor from the outputs of the pipeline stages.
    pub fn assemble(
        ctx: &GeneratorContext,
        files: ClassifiedFiles,
        aggregate: Aggregate,
        rules: Vec<BuildRule>,
    ) -> Result<Self, GenerateError> {
        let build_command = build_command(ctx.platform())?;

        let game = ctx.roots().game().map(|game| GameVariables {
            project_file: path_string(game.project_file()),
            root: path_string(game.root()),
        });

        Ok(Descriptor {
            project_name: ctx.project_name().to_string(),
            engine_root: path_string(ctx.roots().engine_root()),
            game,
            build_command,
            files,
            aggregate,
            rules,
        })
    }

    /// Render the descriptor text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("# CMakeLists generated by cmakegen (v1.1)\n");
        out.push_str("# *DO NOT EDIT*\n\n");
        out.push_str("cmake_minimum_required (VERSION 2.6)\n");
        let _ = writeln!(out, "project ({})\n", self.project_name);

        let _ = writeln!(out, "set(UE4_ROOT_PATH \"{}\")", self.engine_root);
        if let Some(game) = &self.game {
            let _ = writeln!(out, "set(GAME_PROJECT_FILE \"{}\")", game.project_file);
        }
        out.push_str(&self.build_command);
        if let Some(game) = &self.game {
            let _ = writeln!(out, "set(GAME_ROOT_PATH \"{}\")", game.root);
        }
        out.push('\n');

        push_quoted_section(&mut out, "set(SOURCE_FILES \n", &self.files.sources);
        push_quoted_section(&mut out, "set(HEADER_FILES \n", &self.files.headers);
        push_quoted_section(&mut out, "set(CONFIG_FILES \n", &self.files.configs);
        push_quoted_section(&mut out, "include_directories( \n", &self.aggregate.includes);

        out.push_str("add_definitions( \n");
        for definition in &self.aggregate.definitions {
            let _ = writeln!(out, "\t-D{}", definition);
        }
        out.push_str(SECTION_END);

        for rule in &self.rules {
            out.push_str(&rule.render());
        }

        out.push_str("add_executable(FakeTarget ${SOURCE_FILES})\n");
        out
    }

    /// Write the descriptor into `dir`, only if its content changed.
    ///
    /// Returns the descriptor path and whether it was written.
    pub fn write(&self, dir: &Path) -> Result<(PathBuf, bool)> {
        let path = dir.join(DESCRIPTOR_FILE_NAME);
        let written = write_if_changed(&path, &self.render())?;
        Ok((path, written))
    }
}

fn push_quoted_section<'a>(
    out: &mut String,
    opening: &str,
    entries: impl IntoIterator<Item = &'a String>,
) {
    out.push_str(opening);
    for entry in entries {
        let _ = writeln!(out, "\t\"{}\"", entry);
    }
    out.push_str(SECTION_END);
}

fn path_string(path: &Path) -> String {
    clean_separators(&path.to_string_lossy())
}

/// Delete the descriptor in `dir`, if present.
///
/// Returns `true` when a file was removed.
pub fn clean(dir: &Path) -> Result<bool> {
    remove_file_if_exists(&dir.join(DESCRIPTOR_FILE_NAME))
}
