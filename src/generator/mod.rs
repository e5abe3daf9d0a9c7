//! CMakeLists descriptor generation.
//!
//! The pipeline runs in one synchronous pass per stage:
//!
//! 1. [`classify`] buckets every discovered file into sources, headers and
//!    configs, rewriting paths against the engine/game roots and dropping
//!    files excluded on the host platform.
//! 2. [`aggregate`] collects include directories and preprocessor
//!    definitions of all generated projects.
//! 3. [`targets`] enumerates one build rule per target and configuration.
//! 4. [`descriptor`] assembles the sections in fixed order and writes the
//!    file only when its content changed.
//!
//! Everything is built in memory; a failing stage leaves the existing
//! descriptor untouched.

pub mod aggregate;
pub mod classify;
pub mod context;
pub mod descriptor;
pub mod errors;
pub mod exclusion;
pub mod paths;
pub mod targets;

pub use aggregate::Aggregate;
pub use classify::{ClassifiedFiles, FileCategory};
pub use context::GeneratorContext;
pub use descriptor::{Descriptor, DESCRIPTOR_FILE_NAME};
pub use errors::GenerateError;
pub use targets::BuildRule;

use crate::core::{DiscoveredModule, GeneratedProject};

/// Run the whole pipeline and return the assembled descriptor.
pub fn generate(
    modules: &[DiscoveredModule],
    projects: &[GeneratedProject],
    ctx: &GeneratorContext,
) -> Result<Descriptor, GenerateError> {
    // Fail before doing any work on hosts without a build command
    descriptor::build_command(ctx.platform())?;

    let files = classify::classify(modules, ctx);
    let aggregate = aggregate::aggregate(projects, ctx);
    let rules = targets::enumerate(projects, ctx)?;

    tracing::debug!(
        "{} sources, {} headers, {} configs, {} build rules",
        files.sources.len(),
        files.headers.len(),
        files.configs.len(),
        rules.len()
    );

    Descriptor::assemble(ctx, files, aggregate, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameProject, HostPlatform, ModuleFile, ProjectTarget, RootContext};
    use std::path::PathBuf;

    fn inputs() -> (Vec<DiscoveredModule>, Vec<GeneratedProject>) {
        let modules = vec![
            DiscoveredModule::new(
                ModuleFile::new("/ue/Engine/Source/Runtime/Core/Core.Build.cs"),
                vec![
                    PathBuf::from("/ue/Engine/Source/Runtime/Core/Core.Build.cs"),
                    PathBuf::from("/ue/Engine/Source/Runtime/Core/Private/Core.cpp"),
                    PathBuf::from("/ue/Engine/Source/Runtime/Core/Private/Windows/WinFile.cpp"),
                    PathBuf::from("/ue/Engine/Source/Runtime/Core/Public/Core.h"),
                ],
            ),
            DiscoveredModule::new(
                ModuleFile::new("/work/Shooter/Source/Shooter/Shooter.Build.cs"),
                vec![PathBuf::from("/work/Shooter/Source/Shooter/Gun.cpp")],
            ),
        ];

        let projects = vec![
            GeneratedProject::new("/ue/Engine/Intermediate/ProjectFiles/UE4.vcxproj")
                .include_paths(["../../Source/Runtime/Core/Public"])
                .definitions(["WITH_EDITOR=1", "WITH_EDITOR=0"])
                .target(ProjectTarget::new("/ue/Engine/Source/UE4Editor.Target.cs")),
            GeneratedProject::new("/work/Shooter/Intermediate/ProjectFiles/Shooter.vcxproj")
                .target(ProjectTarget::new("/work/Shooter/Source/Shooter.Target.cs")),
        ];

        (modules, projects)
    }

    fn ctx(platform: HostPlatform) -> GeneratorContext {
        let game = GameProject::from_project_file("/work/Shooter/Shooter.uproject").unwrap();
        GeneratorContext::new(RootContext::new("/ue").with_game(game), platform)
    }

    #[test]
    fn test_generate_is_deterministic() {
        let (modules, projects) = inputs();
        let ctx = ctx(HostPlatform::Linux);

        let first = generate(&modules, &projects, &ctx).unwrap().render();
        let second = generate(&modules, &projects, &ctx).unwrap().render();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_sections() {
        let (modules, projects) = inputs();
        let text = generate(&modules, &projects, &ctx(HostPlatform::Mac))
            .unwrap()
            .render();

        assert!(text.contains("\t\"${UE4_ROOT_PATH}/Engine/Source/Runtime/Core/Private/Core.cpp\"\n"));
        assert!(text.contains("\t\"${GAME_ROOT_PATH}/Source/Shooter/Gun.cpp\"\n"));
        assert!(!text.contains("/Windows/"));
        assert!(text.contains("\t-DWITH_EDITOR=1\n"));
        assert!(!text.contains("-DWITH_EDITOR=0"));
        assert!(text.contains("add_custom_target(UE4Editor-Mac-Shipping ${BUILD} UE4Editor Mac Shipping  $(ARGS))\n"));
        assert!(text.contains(
            "add_custom_target(Shooter ${BUILD} Shooter Mac Development -project=\"${GAME_PROJECT_FILE}\" $(ARGS) SOURCES ${SOURCE_FILES} ${HEADER_FILES} ${CONFIG_FILES})\n"
        ));
        assert!(text.ends_with("add_executable(FakeTarget ${SOURCE_FILES})\n"));
    }

    #[test]
    fn test_generate_rejects_unsupported_platform() {
        let (modules, projects) = inputs();
        let err = generate(&modules, &projects, &ctx(HostPlatform::Android)).unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedPlatform(HostPlatform::Android)));
    }
}
