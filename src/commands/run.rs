use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::export::ICO_SIZES;
use crate::pipeline::{self, Outcome};

pub fn run(cli: &Cli, dry_run: bool) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let config_dir = cli.config.parent().unwrap_or(Path::new("."));

    let processed = match pipeline::process(&config, config_dir)? {
        Outcome::MissingInput(path) => {
            bail!("Input file not found: {}", path.display());
        }
        Outcome::Processed(processed) => processed,
    };

    let report = &processed.report;
    println!(
        "{} Loaded {} ({}x{})",
        "✓".green(),
        report.input.display(),
        report.source_width,
        report.source_height
    );
    println!("  {} {}", "·".dimmed(), report.summary());

    if report.content.is_none() {
        println!(
            "{} No visible content after background removal — output is fully transparent.",
            "!".yellow()
        );
    }

    let png_path = config_dir.join(&config.output.png);
    let ico_path = config_dir.join(&config.output.ico);

    if dry_run {
        println!(
            "  {} would write {} ({} bytes, blake3 {})",
            "·".dimmed(),
            png_path.display(),
            processed.png.len(),
            &report.png_hash[..8]
        );
        println!(
            "  {} would write {} ({} bytes, blake3 {})",
            "·".dimmed(),
            ico_path.display(),
            processed.ico.len(),
            &report.ico_hash[..8]
        );
        println!("\n{} Dry run — no files written.", "ℹ".blue());
        return Ok(());
    }

    write_output(&png_path, &processed.png)?;
    println!(
        "{} Wrote {} ({} bytes)",
        "✓".green(),
        png_path.display(),
        processed.png.len()
    );

    write_output(&ico_path, &processed.ico)?;
    println!(
        "{} Wrote {} ({} renditions: {})",
        "✓".green(),
        ico_path.display(),
        ICO_SIZES.len(),
        ICO_SIZES.map(|s| s.to_string()).join(", ")
    );

    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
