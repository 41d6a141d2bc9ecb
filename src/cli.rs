use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "icoforge",
    about = "Clean up generated artwork into a transparent PNG and a multi-size Windows ICO"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true, default_value = "icoforge.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new icoforge.toml config file
    Init,

    /// Process the source image and write the PNG and ICO outputs
    Run {
        /// Show what would be written without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Check config validity and whether outputs are up to date
    Check,
}
