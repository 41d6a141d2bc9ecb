use image::{imageops, RgbaImage};

/// Smallest axis-aligned rectangle enclosing every pixel with non-zero alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for ContentBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

/// Returns `None` when the image has no visible content at all.
pub fn content_box(img: &RgbaImage) -> Option<ContentBox> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] != 0 {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if !found {
        return None;
    }

    Some(ContentBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

pub fn crop_to(img: &RgbaImage, content: ContentBox) -> RgbaImage {
    imageops::crop_imm(img, content.x, content.y, content.width, content.height).to_image()
}

/// Centers `img` on a fresh transparent square canvas sized to its larger
/// dimension. Pixels are copied verbatim, not composited. The offset uses
/// truncating division, so odd gaps land one pixel toward the top/left.
pub fn square_canvas(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    let side = w.max(h);

    let mut canvas = RgbaImage::new(side, side);
    let x = ((side - w) / 2) as i64;
    let y = ((side - h) / 2) as i64;
    imageops::replace(&mut canvas, img, x, y);

    canvas
}
