//! Recolors fully transparent pixels from their nearest visible neighbors.
//!
//! After the white key runs, every removed pixel is solid white with zero
//! alpha. Resampling the artwork down to the small icon renditions blends
//! those hidden white values into edge pixels, which shows up as a pale halo
//! around the content. Flood-filling color outward from the opaque boundary
//! removes the halo; alpha is never touched.
//!
//! Adapted from Asphalt (https://github.com/jackTabsCode/asphalt).

use bit_vec::BitVec;
use image::{Rgba, RgbaImage};

const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub fn bleed_transparent(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    let idx = |x: u32, y: u32| (y * w + x) as usize;

    // Pixels whose color is trustworthy: opaque ones up front, bled ones as
    // each ring completes.
    let mut colored = BitVec::from_elem((w * h) as usize, false);
    let mut queued = BitVec::from_elem((w * h) as usize, false);

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] != 0 {
            colored.set(idx(x, y), true);
            queued.set(idx(x, y), true);
        }
    }

    // First ring: transparent pixels touching the opaque boundary.
    let mut ring: Vec<(u32, u32)> = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if colored[idx(x, y)] {
                continue;
            }
            if neighbors(x, y, w, h).any(|(nx, ny)| colored[idx(nx, ny)]) {
                queued.set(idx(x, y), true);
                ring.push((x, y));
            }
        }
    }

    while !ring.is_empty() {
        let mut next = Vec::new();

        for &(x, y) in &ring {
            let mut sum = [0u32; 3];
            let mut samples = 0u32;

            for (nx, ny) in neighbors(x, y, w, h) {
                if colored[idx(nx, ny)] {
                    let source = img.get_pixel(nx, ny);
                    sum[0] += u32::from(source[0]);
                    sum[1] += u32::from(source[1]);
                    sum[2] += u32::from(source[2]);
                    samples += 1;
                } else if !queued[idx(nx, ny)] {
                    queued.set(idx(nx, ny), true);
                    next.push((nx, ny));
                }
            }

            let n = samples.max(1);
            img.put_pixel(
                x,
                y,
                Rgba([
                    (sum[0] / n) as u8,
                    (sum[1] / n) as u8,
                    (sum[2] / n) as u8,
                    0,
                ]),
            );
        }

        // Ring members only become sample sources once the whole ring is
        // done, so a ring never samples its own half-finished pixels.
        for &(x, y) in &ring {
            colored.set(idx(x, y), true);
        }

        ring = next;
    }
}

fn neighbors(x: u32, y: u32, w: u32, h: u32) -> impl Iterator<Item = (u32, u32)> {
    NEIGHBORS.iter().filter_map(move |&(dx, dy)| {
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;

        if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
            return None;
        }

        Some((nx as u32, ny as u32))
    })
}
