//! Command implementations

pub mod clean;
pub mod completions;
pub mod generate;
pub mod plan;

use anyhow::Result;

use crate::cli::RootArgs;
use cmakegen::ops::GenerateOptions;
use cmakegen::util::GlobalContext;

/// Merge configuration files and command-line arguments into options.
///
/// Command-line arguments take precedence over both config files.
pub fn resolve_options(args: &RootArgs, verbose: bool) -> Result<GenerateOptions> {
    let mut gctx = GlobalContext::new()?.with_config_file(args.config.clone());
    gctx.set_verbose(verbose);

    let mut config = gctx.load_config()?;
    if let Some(root) = &args.engine_root {
        config.engine.root = Some(root.clone());
    }
    if let Some(game) = &args.game {
        config.game.project = Some(game.clone());
    }
    if let Some(platform) = args.platform {
        config.generator.platform = Some(platform);
    }
    if let Some(dir) = &args.output_dir {
        config.generator.output_dir = Some(dir.clone());
    }

    GenerateOptions::from_config(&config, &gctx)
}
