use anyhow::Result;
use clap::Parser;
use icoforge::cli::{Cli, Commands};
use icoforge::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => commands::init::run(&cli),
        Commands::Run { dry_run } => commands::run::run(&cli, *dry_run),
        Commands::Check => commands::check::run(&cli),
    }
}
