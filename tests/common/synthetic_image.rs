#![allow(dead_code)]
use livewire::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Solid colour image.
pub fn uniform(width: usize, height: usize, color: Rgb) -> RgbImage {
    RgbImage::filled(width, height, color)
}

/// Filled axis-aligned rectangle `rows × cols` (half-open ranges) on a
/// background colour.
pub fn rectangle(
    width: usize,
    height: usize,
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
    background: Rgb,
    foreground: Rgb,
) -> RgbImage {
    assert!(rows.end <= height && cols.end <= width, "rectangle must fit");
    let mut img = RgbImage::filled(width, height, background);
    for y in rows {
        for x in cols.clone() {
            img.set(x, y, foreground);
        }
    }
    img
}

/// Gray levels per column, one row per entry of `rows`.
pub fn columns(levels: &[u8], rows: usize) -> RgbImage {
    let mut img = RgbImage::new(levels.len(), rows);
    for y in 0..rows {
        for (x, &v) in levels.iter().enumerate() {
            img.set(x, y, Rgb::gray(v));
        }
    }
    img
}

/// Pseudo-random colours, reproducible for a given `seed`.
pub fn noise(width: usize, height: usize, seed: u64) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, Rgb::new(rng.gen(), rng.gen(), rng.gen()));
        }
    }
    img
}
