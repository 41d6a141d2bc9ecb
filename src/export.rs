use std::io::Cursor;

use anyhow::{Context, Result};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageFormat, RgbaImage};

/// Rendition sizes embedded in the ICO, largest first.
pub const ICO_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(buf)
}

/// Encodes an ICO holding one Lanczos-resampled rendition per entry in
/// [`ICO_SIZES`]. Every size is emitted even when the source canvas is
/// smaller, so consumers always find the full set.
pub fn encode_ico(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut rendition_pngs = Vec::with_capacity(ICO_SIZES.len());
    for &size in &ICO_SIZES {
        let rendition = imageops::resize(img, size, size, FilterType::Lanczos3);
        let mut buf = Vec::new();
        rendition
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .with_context(|| format!("Failed to encode {size}px rendition"))?;
        rendition_pngs.push(buf);
    }

    let frames = ICO_SIZES
        .iter()
        .zip(&rendition_pngs)
        .map(|(&size, png)| IcoFrame::with_encoded(png, size, size, ExtendedColorType::Rgba8))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to assemble ICO frames")?;

    let mut buf = Vec::new();
    IcoEncoder::new(&mut buf)
        .encode_images(&frames)
        .context("Failed to encode ICO")?;
    Ok(buf)
}
