//! `cmakegen plan` command
//!
//! Builds the descriptor in memory without touching the output directory.

use anyhow::Result;

use crate::cli::PlanArgs;
use crate::commands::resolve_options;
use cmakegen::ops;

pub fn execute(args: PlanArgs, verbose: bool) -> Result<()> {
    let opts = resolve_options(&args.roots, verbose)?;
    let (_, descriptor) = ops::plan(&opts)?;

    if args.text {
        print!("{}", descriptor.render());
    } else {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    }

    Ok(())
}
