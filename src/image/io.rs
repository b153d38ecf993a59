//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/BMP into an owned `RgbImage`.
//! - `save_rgb_image`: write an `RgbImage` to disk (format from extension).
//! - `draw_path`: paint a traced boundary onto a copy of an image.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageView, Rgb, RgbImage};
use crate::types::GridPoint;
use image::{ImageBuffer, Rgb as PixelRgb};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbImage::from_raw_rgb(width, height, img.as_raw()).map_err(|e| e.to_string())
}

/// Save an RGB buffer; the format follows the file extension.
pub fn save_rgb_image(buffer: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut raw = Vec::with_capacity(buffer.w * buffer.h * 3);
    for row in buffer.rows() {
        for px in row {
            raw.extend_from_slice(&[px.red, px.green, px.blue]);
        }
    }
    let image: ImageBuffer<PixelRgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.w as u32, buffer.h as u32, raw)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Return a copy of `image` with every in-bounds point of `path` set to `color`.
pub fn draw_path(image: &RgbImage, path: &[GridPoint], color: Rgb) -> RgbImage {
    let mut out = image.clone();
    for p in path {
        if p.row < out.h && p.col < out.w {
            out.set(p.col, p.row, color);
        }
    }
    out
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
