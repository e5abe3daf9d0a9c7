//! `cmakegen generate` command

use anyhow::Result;

use crate::cli::GenerateArgs;
use crate::commands::resolve_options;
use cmakegen::ops;

pub fn execute(args: GenerateArgs, verbose: bool) -> Result<()> {
    let mut opts = resolve_options(&args.roots, verbose)?;
    if args.project_name.is_some() {
        opts.project_name = args.project_name;
    }

    let result = ops::generate(&opts)?;
    let files = &result.descriptor.files;

    if result.written {
        eprintln!("   Generated {}", result.path.display());
    } else {
        eprintln!("   Unchanged {}", result.path.display());
    }
    eprintln!(
        "             {} sources, {} headers, {} configs, {} build rules",
        files.sources.len(),
        files.headers.len(),
        files.configs.len(),
        result.descriptor.rules.len()
    );

    Ok(())
}
