//! Implementation of `cmakegen generate` and `cmakegen plan`.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::core::{
    Configuration, DiscoveredModule, GameProject, GeneratedProject, HostPlatform, RootContext,
};
use crate::generator::{self, Descriptor, GenerateError, GeneratorContext};
use crate::sources::{
    DeclaredProjects, ModuleDiscovery, PathSource, ProjectSource, SourceFileSearch, TargetProjects,
};
use crate::util::config::Config;
use crate::util::fs::absolutize;
use crate::util::GlobalContext;

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Directory containing `Engine/`
    pub engine_root: PathBuf,

    /// Game `.uproject` file
    pub game_project: Option<PathBuf>,

    /// Host platform override (None = running host)
    pub platform: Option<HostPlatform>,

    /// Directory receiving the descriptor (None = game root, else engine root)
    pub output_dir: Option<PathBuf>,

    /// `project()` name override
    pub project_name: Option<String>,

    /// Valid configurations (None = all)
    pub configurations: Option<Vec<Configuration>>,

    /// Declared projects (empty = one project per discovered target)
    pub projects: Vec<GeneratedProject>,
}

impl GenerateOptions {
    /// Create options for an engine root.
    pub fn new(engine_root: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            engine_root: engine_root.into(),
            ..Default::default()
        }
    }

    /// Build options from merged configuration.
    ///
    /// Paths in the configuration resolve against the working directory,
    /// except project and target paths, which resolve against the engine
    /// root.
    pub fn from_config(config: &Config, gctx: &GlobalContext) -> Result<Self> {
        let engine_root = config
            .engine
            .root
            .as_deref()
            .map(|p| gctx.resolve(p))
            .ok_or_else(|| {
                anyhow!(
                    "no engine root configured\n\
                     \n\
                     Pass `--engine-root <DIR>` or set `engine.root` in CMakeGen.toml."
                )
            })?;

        let projects = config
            .projects
            .iter()
            .map(|project| resolve_project(project, &engine_root))
            .collect();

        Ok(GenerateOptions {
            game_project: config.game.project.as_deref().map(|p| gctx.resolve(p)),
            platform: config.generator.platform,
            output_dir: config.generator.output_dir.as_deref().map(|p| gctx.resolve(p)),
            project_name: config.generator.project_name.clone(),
            configurations: config.generator.configurations.clone(),
            projects,
            engine_root,
        })
    }

    /// Root context for these options.
    pub fn roots(&self) -> Result<RootContext> {
        let engine_dir = self.engine_root.join("Engine");
        if !engine_dir.is_dir() {
            return Err(GenerateError::MissingEngineDir(engine_dir).into());
        }

        let mut roots = RootContext::new(&self.engine_root);
        if let Some(project_file) = &self.game_project {
            if !project_file.is_file() {
                return Err(GenerateError::InvalidGameProject(project_file.clone()).into());
            }
            roots = roots.with_game(GameProject::from_project_file(project_file)?);
        }

        Ok(roots)
    }

    /// Generator context for these options.
    pub fn context(&self) -> Result<GeneratorContext> {
        let platform = match self.platform {
            Some(platform) => platform,
            None => HostPlatform::current().ok_or_else(|| {
                anyhow!(
                    "unable to detect the host platform ({})\n\
                     \n\
                     Pass `--platform <Win64|Mac|Linux>`.",
                    std::env::consts::OS
                )
            })?,
        };

        let mut ctx = GeneratorContext::new(self.roots()?, platform);
        if let Some(dir) = &self.output_dir {
            ctx = ctx.with_master_project_dir(dir);
        }
        if let Some(name) = &self.project_name {
            ctx = ctx.with_project_name(name);
        }
        if let Some(configurations) = &self.configurations {
            ctx = ctx.with_configurations(configurations.clone());
        }

        Ok(ctx)
    }

    /// Directory the descriptor is written to.
    pub fn master_project_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            self.game_project
                .as_deref()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.engine_root.clone())
        })
    }
}

fn resolve_project(project: &GeneratedProject, engine_root: &Path) -> GeneratedProject {
    let mut resolved = project.clone();
    resolved.path = absolutize(&project.path, engine_root);
    for target in &mut resolved.targets {
        if let Some(path) = target.path.take() {
            target.path = Some(absolutize(&path, engine_root));
        }
    }
    resolved
}

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Path of the descriptor
    pub path: PathBuf,

    /// Whether the file was (re)written
    pub written: bool,

    /// The generated descriptor
    pub descriptor: Descriptor,
}

/// Discover modules and their files through the given collaborators.
pub fn discover(
    roots: &RootContext,
    discovery: &dyn ModuleDiscovery,
    search: &dyn SourceFileSearch,
) -> Result<Vec<DiscoveredModule>> {
    let modules = discovery.discover_modules(roots)?;

    modules
        .into_iter()
        .map(|module| {
            let files = search.find_module_source_files(&module).with_context(|| {
                format!("failed to enumerate files of module {}", module.path().display())
            })?;
            Ok(DiscoveredModule::new(module, files))
        })
        .collect()
}

/// Build the descriptor in memory using explicit collaborators.
pub fn plan_with(
    ctx: &GeneratorContext,
    discovery: &dyn ModuleDiscovery,
    search: &dyn SourceFileSearch,
    projects: &dyn ProjectSource,
) -> Result<Descriptor> {
    // Unsupported hosts fail before any discovery work
    ctx.host_architecture()?;

    let modules = discover(ctx.roots(), discovery, search)?;
    let projects = projects.projects(ctx.roots())?;

    tracing::info!(
        "Generating for {} modules and {} projects on {}",
        modules.len(),
        projects.len(),
        ctx.platform()
    );

    Ok(generator::generate(&modules, &projects, ctx)?)
}

/// Build the descriptor in memory, discovering modules on disk.
pub fn plan(opts: &GenerateOptions) -> Result<(GeneratorContext, Descriptor)> {
    let ctx = opts.context()?;
    let source = PathSource::new();

    let descriptor = if opts.projects.is_empty() {
        plan_with(&ctx, &source, &source, &TargetProjects::new())?
    } else {
        let declared = DeclaredProjects::new(opts.projects.clone());
        plan_with(&ctx, &source, &source, &declared)?
    };

    Ok((ctx, descriptor))
}

/// Generate the descriptor and write it if its content changed.
pub fn generate(opts: &GenerateOptions) -> Result<GenerateResult> {
    let (ctx, descriptor) = plan(opts)?;

    let (path, written) = descriptor.write(ctx.master_project_dir())?;
    if written {
        tracing::info!("Wrote {}", path.display());
    } else {
        tracing::info!("{} is up to date", path.display());
    }

    Ok(GenerateResult {
        path,
        written,
        descriptor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::DESCRIPTOR_FILE_NAME;
    use crate::test_support::EngineFixture;

    fn fixture() -> EngineFixture {
        EngineFixture::new()
            .module("Engine/Source/Runtime/Core", "Core")
            .file("Engine/Source/Runtime/Core/Private/Core.cpp", "")
            .file("Engine/Source/Runtime/Core/Private/Windows/WindowsFile.cpp", "")
            .file("Engine/Source/Runtime/Core/Public/Core.h", "")
            .file("Engine/Source/ThirdParty/zlib/zlib.h", "")
            .target("Engine/Source", "UE4Editor")
            .with_game("Shooter")
            .module("Shooter/Source/Shooter", "Shooter")
            .file("Shooter/Source/Shooter/Gun.cpp", "")
            .target("Shooter/Source", "Shooter")
    }

    fn options(fixture: &EngineFixture, platform: HostPlatform) -> GenerateOptions {
        GenerateOptions {
            game_project: fixture.game_project_file(),
            platform: Some(platform),
            ..GenerateOptions::new(fixture.root())
        }
    }

    #[test]
    fn test_generate_writes_then_is_idempotent() {
        let fixture = fixture();
        let opts = options(&fixture, HostPlatform::Linux);

        let first = generate(&opts).unwrap();
        assert!(first.written);
        assert_eq!(first.path, fixture.path("Shooter").join(DESCRIPTOR_FILE_NAME));

        let contents = std::fs::read_to_string(&first.path).unwrap();
        let second = generate(&opts).unwrap();
        assert!(!second.written);
        assert_eq!(std::fs::read_to_string(&second.path).unwrap(), contents);
    }

    #[test]
    fn test_generate_contents_from_disk() {
        let fixture = fixture();
        let result = generate(&options(&fixture, HostPlatform::Mac)).unwrap();
        let text = std::fs::read_to_string(&result.path).unwrap();

        assert!(text.contains("\t\"${UE4_ROOT_PATH}/Engine/Source/Runtime/Core/Private/Core.cpp\"\n"));
        assert!(text.contains("\t\"${GAME_ROOT_PATH}/Source/Shooter/Gun.cpp\"\n"));
        assert!(text.contains("\t\"${GAME_ROOT_PATH}/Source/Shooter/Shooter.Build.cs\"\n"));
        assert!(!text.contains("WindowsFile.cpp"));
        assert!(!text.contains("zlib.h"));
        assert!(text.contains("add_custom_target(UE4Editor-Mac-Debug ${BUILD} UE4Editor Mac Debug  $(ARGS))\n"));
        assert!(text.contains(
            "add_custom_target(Shooter-Mac-Debug ${BUILD} Shooter Mac Debug -project=\"${GAME_PROJECT_FILE}\" $(ARGS))\n"
        ));
    }

    #[test]
    fn test_declared_projects_resolve_against_engine_root() {
        let fixture = fixture();
        let mut opts = options(&fixture, HostPlatform::Linux);
        opts.projects = vec![resolve_project(
            &GeneratedProject::new("Engine/Intermediate/ProjectFiles/UE4.vcxproj")
                .include_paths(["../../Source/Runtime/Core/Public"])
                .definitions(["WITH_EDITOR=1"])
                .target(crate::core::ProjectTarget::new("Engine/Source/UE4Editor.Target.cs")),
            fixture.root(),
        )];

        let (_, descriptor) = plan(&opts).unwrap();
        let includes: Vec<_> = descriptor.aggregate.includes.iter().cloned().collect();
        assert_eq!(includes, vec!["${UE4_ROOT_PATH}/Engine/Source/Runtime/Core/Public"]);
        assert_eq!(descriptor.rules.last().unwrap().target, "UE4Editor");
    }

    #[test]
    fn test_missing_engine_dir_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut opts = GenerateOptions::new(tmp.path());
        opts.platform = Some(HostPlatform::Linux);

        let err = generate(&opts).unwrap_err();
        assert!(err.to_string().contains("engine directory not found"));
    }

    #[test]
    fn test_unsupported_platform_writes_nothing() {
        let fixture = fixture();
        let opts = options(&fixture, HostPlatform::Android);

        assert!(generate(&opts).is_err());
        assert!(!fixture.path("Shooter").join(DESCRIPTOR_FILE_NAME).exists());
    }

    #[test]
    fn test_master_project_dir_defaults() {
        let mut opts = GenerateOptions::new("/ue");
        assert_eq!(opts.master_project_dir(), PathBuf::from("/ue"));

        opts.game_project = Some(PathBuf::from("/work/Shooter/Shooter.uproject"));
        assert_eq!(opts.master_project_dir(), PathBuf::from("/work/Shooter"));

        opts.output_dir = Some(PathBuf::from("/out"));
        assert_eq!(opts.master_project_dir(), PathBuf::from("/out"));
    }
}
