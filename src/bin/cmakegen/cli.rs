//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use cmakegen::HostPlatform;

/// cmakegen - CMakeLists.txt generator for Unreal-style module build graphs
#[derive(Parser)]
#[command(name = "cmakegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate CMakeLists.txt for the engine (and game) checkout
    Generate(GenerateArgs),

    /// Print the descriptor that would be generated, as JSON
    Plan(PlanArgs),

    /// Remove the generated CMakeLists.txt
    Clean(CleanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments locating the engine and game checkouts.
#[derive(Args, Clone, Debug, Default)]
pub struct RootArgs {
    /// Config file to use instead of ./CMakeGen.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory containing `Engine/`
    #[arg(long, env = "CMAKEGEN_ENGINE_ROOT")]
    pub engine_root: Option<PathBuf>,

    /// Game `.uproject` file
    #[arg(long)]
    pub game: Option<PathBuf>,

    /// Generate for this host platform instead of the running one
    #[arg(long)]
    pub platform: Option<HostPlatform>,

    /// Directory receiving CMakeLists.txt
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub roots: RootArgs,

    /// Name used in the `project()` declaration
    #[arg(long)]
    pub project_name: Option<String>,
}

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub roots: RootArgs,

    /// Only print the rendered descriptor text
    #[arg(long)]
    pub text: bool,
}

#[derive(Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub roots: RootArgs,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
