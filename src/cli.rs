//! CLI argument definitions using clap derive API

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use table_prompts::Prompt;

/// Run filter/map/reduce prompts over small in-memory datasets
#[derive(Parser, Debug)]
#[command(name = "table-prompts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Bundle JSON file or directory of per-table files (default: bundled sample)
    #[arg(short, long, global = true, env = "TABLE_PROMPTS_DATA")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every prompt with its dataset
    List,

    /// Run prompts and print their results as JSON
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Prompts to run, in order
    #[arg(value_enum, required_unless_present = "all", conflicts_with = "all")]
    pub prompts: Vec<Prompt>,

    /// Run every prompt
    #[arg(short, long)]
    pub all: bool,
}
