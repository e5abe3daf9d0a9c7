//! `cmakegen clean` command

use anyhow::Result;

use crate::cli::CleanArgs;
use crate::commands::resolve_options;
use cmakegen::ops;

pub fn execute(args: CleanArgs, verbose: bool) -> Result<()> {
    let opts = resolve_options(&args.roots, verbose)?;
    let result = ops::clean(&opts.master_project_dir())?;

    if result.removed {
        eprintln!("     Removed {}", result.path.display());
    } else {
        eprintln!("     Nothing to clean at {}", result.path.display());
    }

    Ok(())
}
