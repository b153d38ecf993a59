//! Owned 8-bit RGB buffer in row-major layout (stride == width).
//!
//! This is the pixel buffer handed to the core by whatever decoded the image.
//! Pixels are immutable once loaded; filtering produces a new buffer.
use super::traits::{ImageView, ImageViewMut};
use crate::error::ScissorsError;
use serde::{Deserialize, Serialize};

/// Fixed luminance weights for the red, green and blue channels.
pub const LUMA_WEIGHTS: [f64; 3] = [0.21, 0.72, 0.07];

/// One pixel with three 8-bit colour channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::gray(0);
    pub const WHITE: Rgb = Rgb::gray(255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Scalar brightness `0.21·R + 0.72·G + 0.07·B`.
    #[inline]
    pub fn luminance(self) -> f64 {
        LUMA_WEIGHTS[0] * self.red as f64
            + LUMA_WEIGHTS[1] * self.green as f64
            + LUMA_WEIGHTS[2] * self.blue as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RgbImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order, origin top-left
    pub data: Vec<Rgb>,
}

impl RgbImage {
    /// Construct a buffer of size `w × h` filled with `fill`.
    pub fn filled(w: usize, h: usize, fill: Rgb) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![fill; w * h],
        }
    }

    /// Construct a black buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, Rgb::BLACK)
    }

    /// Wrap existing pixels, checking the length against `w × h`.
    pub fn from_pixels(w: usize, h: usize, data: Vec<Rgb>) -> Result<Self, ScissorsError> {
        if data.len() != w * h {
            return Err(ScissorsError::BufferSizeMismatch {
                expected: w * h,
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Wrap interleaved `RGBRGB…` bytes.
    pub fn from_raw_rgb(w: usize, h: usize, raw: &[u8]) -> Result<Self, ScissorsError> {
        if raw.len() != w * h * 3 {
            return Err(ScissorsError::BufferSizeMismatch {
                expected: w * h * 3,
                actual: raw.len(),
            });
        }
        let data = raw
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: Rgb) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Luminance of the pixel at (x, y).
    #[inline]
    pub fn luminance(&self, x: usize, y: usize) -> f64 {
        self.get(x, y).luminance()
    }
}

impl ImageView for RgbImage {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for RgbImage {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgb] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
