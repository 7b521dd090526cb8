mod cli;

use anyhow::Result;
use clap::Parser;
use log::info;

use cli::{Cli, Commands, GlobalArgs, RunArgs};
use table_prompts::data::loader;
use table_prompts::{Datasets, Prompt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.global.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match &cli.command {
        Commands::List => {
            list();
            Ok(())
        }
        Commands::Run(args) => {
            let mut datasets = load(&cli.global)?;
            run(args, &mut datasets)
        }
    }
}

fn load(global: &GlobalArgs) -> Result<Datasets> {
    match &global.data {
        Some(path) => {
            info!("loading datasets from {}", path.display());
            loader::load_path(path)
        }
        None => loader::load_sample(),
    }
}

fn list() {
    for prompt in Prompt::all() {
        let marker = if prompt.mutates() { " (mutates)" } else { "" };
        println!("{:<28} {}{marker}", prompt.to_string(), prompt.dataset());
    }
}

fn run(args: &RunArgs, datasets: &mut Datasets) -> Result<()> {
    let prompts: &[Prompt] = if args.all { Prompt::all() } else { &args.prompts };
    for &prompt in prompts {
        let value = table_prompts::run(prompt, datasets)?;
        println!("── {prompt} ({}) ──", prompt.dataset());
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
