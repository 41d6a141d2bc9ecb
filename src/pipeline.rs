use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::bleed;
use crate::config::Config;
use crate::export;
use crate::matte;
use crate::trim::{self, ContentBox};

/// Result of a pipeline pass. A missing input is a recognized condition
/// rather than an error, so callers decide how loudly to fail.
#[derive(Debug)]
pub enum Outcome {
    Processed(Processed),
    MissingInput(PathBuf),
}

#[derive(Debug)]
pub struct Processed {
    pub report: Report,
    pub png: Vec<u8>,
    pub ico: Vec<u8>,
}

#[derive(Debug)]
pub struct Report {
    pub input: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub keyed: u64,
    pub content: Option<ContentBox>,
    pub canvas_side: u32,
    pub png_hash: String,
    pub ico_hash: String,
}

impl Report {
    pub fn summary(&self) -> String {
        let total = u64::from(self.source_width) * u64::from(self.source_height);
        match self.content {
            Some(content) => format!(
                "keyed {} of {} pixels, content {}, canvas {}x{}",
                self.keyed, total, content, self.canvas_side, self.canvas_side
            ),
            None => format!(
                "keyed {} of {} pixels, no visible content, canvas {}x{}",
                self.keyed, total, self.canvas_side, self.canvas_side
            ),
        }
    }
}

/// Runs the full transformation in memory: white key, optional bleed, crop
/// to content, center on a square canvas, then encode both outputs. Nothing
/// is written to disk.
pub fn process(config: &Config, config_dir: &Path) -> Result<Outcome> {
    let input = config_dir.join(&config.input);
    if !input.exists() {
        return Ok(Outcome::MissingInput(input));
    }

    let mut img = image::open(&input)
        .with_context(|| format!("Failed to decode {}", input.display()))?
        .to_rgba8();
    let (source_width, source_height) = img.dimensions();

    let keyed = matte::key_out_background(&mut img, config.matte.threshold);

    if config.matte.bleed {
        bleed::bleed_transparent(&mut img);
    }

    // An all-background image has no content box and flows on uncropped at
    // its original size.
    let content = trim::content_box(&img);
    let cropped = match content {
        Some(content_box) => trim::crop_to(&img, content_box),
        None => img,
    };

    let canvas = trim::square_canvas(&cropped);
    let canvas_side = canvas.width();

    let png = export::encode_png(&canvas)?;
    let ico = export::encode_ico(&canvas)?;
    let png_hash = blake3::hash(&png).to_hex().to_string();
    let ico_hash = blake3::hash(&ico).to_hex().to_string();

    Ok(Outcome::Processed(Processed {
        report: Report {
            input,
            source_width,
            source_height,
            keyed,
            content,
            canvas_side,
            png_hash,
            ico_hash,
        },
        png,
        ico,
    }))
}
