//! Separable Gaussian smoothing of the colour buffer before cost estimation.
//!
//! A vertical pass writes a real-valued intermediate buffer, then a
//! horizontal pass produces the final 8-bit buffer. Taps that fall outside
//! the image are skipped and the remaining weights renormalised, so borders
//! are neither reflected nor zero-padded.

pub mod kernel;

use crate::error::ScissorsError;
use crate::image::{ImageView, ImageViewMut, Rgb, RgbF64, RgbImage, RgbImageF64};
use kernel::SeparableFilter;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

pub use kernel::{odd_size, GaussianKernel};

/// Gaussian filter parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingOptions {
    /// Number of taps; even values are bumped to the next odd value.
    pub size: usize,
    /// Standard deviation in pixels, must be finite and positive.
    pub sigma: f64,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            size: 5,
            sigma: 1.0,
        }
    }
}

impl SmoothingOptions {
    pub fn new(size: usize, sigma: f64) -> Self {
        Self { size, sigma }
    }

    pub fn validate(&self) -> Result<(), ScissorsError> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(ScissorsError::InvalidFilter {
                size: self.size,
                sigma: self.sigma,
            });
        }
        Ok(())
    }

    pub fn kernel(&self) -> Result<GaussianKernel, ScissorsError> {
        self.validate()?;
        Ok(GaussianKernel::new(self.size, self.sigma))
    }
}

/// Smooth `image` with a separable Gaussian, returning a new buffer.
pub fn gaussian_smooth(
    image: &RgbImage,
    options: SmoothingOptions,
) -> Result<RgbImage, ScissorsError> {
    let kernel = options.kernel()?;
    let start = Instant::now();
    let out = apply(&kernel, image);
    debug!(
        "gaussian_smooth: {}x{} taps={} sigma={:.3} in {:.3} ms",
        image.w,
        image.h,
        kernel.len(),
        kernel.sigma(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(out)
}

/// Vertical then horizontal pass of `filter` over `image`.
///
/// Taps outside the image are dropped and the remaining weights rescaled to
/// sum to one, and each output channel is rounded to the nearest integer
/// before clamping to `0..=255`. Truncating instead would darken a flat
/// image by one level wherever the weights sum slightly below one, so a
/// constant image only comes back unchanged with rounding.
pub fn apply<F: SeparableFilter + ?Sized>(filter: &F, image: &RgbImage) -> RgbImage {
    let (w, h) = (image.w, image.h);
    let mut vertical = RgbImageF64::new(w, h);
    let mut out = RgbImage::new(w, h);
    if image.is_empty() {
        return out;
    }
    let taps = filter.taps();
    let radius = filter.radius() as isize;

    for y in 0..h {
        let dst_row = vertical.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let Some(sy) = tap_index(y, k, radius, h) else {
                continue;
            };
            let src_row = image.row(sy);
            for (dst, src) in dst_row.iter_mut().zip(src_row) {
                dst.add_scaled(src.red as f64, src.green as f64, src.blue as f64, tap);
            }
        }
        let norm = tap_weight(taps, y, radius, h);
        for dst in dst_row.iter_mut() {
            scale(dst, norm);
        }
    }

    for y in 0..h {
        let src_row = vertical.row(y);
        let dst_row = out.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let mut acc = RgbF64::default();
            for (k, &tap) in taps.iter().enumerate() {
                if let Some(sx) = tap_index(x, k, radius, w) {
                    let s = src_row[sx];
                    acc.add_scaled(s.red, s.green, s.blue, tap);
                }
            }
            scale(&mut acc, tap_weight(taps, x, radius, w));
            *dst = to_rgb(acc);
        }
    }
    out
}

/// Source index of tap `k` around `center`, or `None` when it falls outside.
#[inline]
fn tap_index(center: usize, k: usize, radius: isize, upper: usize) -> Option<usize> {
    let idx = center as isize + k as isize - radius;
    (idx >= 0 && (idx as usize) < upper).then_some(idx as usize)
}

/// Sum of the taps that land inside `[0, upper)` around `center`.
#[inline]
fn tap_weight(taps: &[f64], center: usize, radius: isize, upper: usize) -> f64 {
    taps.iter()
        .enumerate()
        .filter(|(k, _)| tap_index(center, *k, radius, upper).is_some())
        .map(|(_, t)| t)
        .sum()
}

#[inline]
fn scale(px: &mut RgbF64, weight: f64) {
    if weight > 0.0 {
        px.red /= weight;
        px.green /= weight;
        px.blue /= weight;
    }
}

#[inline]
fn to_rgb(px: RgbF64) -> Rgb {
    let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(px.red), channel(px.green), channel(px.blue))
}
