use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::pipeline::{self, Outcome};

pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    println!("{} Config is valid ({})", "✓".green(), cli.config.display());

    let config_dir = cli.config.parent().unwrap_or(Path::new("."));

    let processed = match pipeline::process(&config, config_dir)? {
        Outcome::MissingInput(path) => {
            println!("{} Input file not found: {}", "✗".red(), path.display());
            return Ok(());
        }
        Outcome::Processed(processed) => processed,
    };

    let report = &processed.report;
    println!(
        "{} Input decodes ({}x{})",
        "✓".green(),
        report.source_width,
        report.source_height
    );
    println!("  {} {}", "·".dimmed(), report.summary());

    if report.content.is_none() {
        println!(
            "{} No visible content after background removal.",
            "!".yellow()
        );
    }

    let png_path = config_dir.join(&config.output.png);
    let ico_path = config_dir.join(&config.output.ico);
    let png_fresh = output_matches(&png_path, &report.png_hash);
    let ico_fresh = output_matches(&ico_path, &report.ico_hash);

    if png_fresh && ico_fresh {
        println!("{} Outputs are up to date.", "✓".green());
        return Ok(());
    }

    for (path, fresh) in [(&png_path, png_fresh), (&ico_path, ico_fresh)] {
        if !fresh {
            let state = if path.exists() { "stale" } else { "missing" };
            println!("  {} {} {}", "~".yellow(), state, path.display());
        }
    }
    println!("{} Out of date. Run `icoforge run` to refresh.", "!".yellow());

    Ok(())
}

fn output_matches(path: &Path, expected_hash: &str) -> bool {
    match std::fs::read(path) {
        Ok(bytes) => blake3::hash(&bytes).to_hex().to_string() == expected_hash,
        Err(_) => false,
    }
}
