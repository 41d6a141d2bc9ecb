use image::{Rgba, RgbaImage};

/// Keys out the near-white background of `img` in place: every pixel whose
/// red, green and blue channels all exceed `threshold` is replaced with fully
/// transparent white, color included. Every other pixel is left bit-identical,
/// whatever its alpha. Returns the number of pixels keyed.
pub fn key_out_background(img: &mut RgbaImage, threshold: u8) -> u64 {
    let mut keyed = 0u64;

    for pixel in img.pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        if r > threshold && g > threshold && b > threshold {
            *pixel = Rgba([255, 255, 255, 0]);
            keyed += 1;
        }
    }

    keyed
}
