//! Real-valued RGB buffer used between the vertical and horizontal smoothing
//! passes so the intermediate result is not truncated.
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RgbF64 {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl RgbF64 {
    #[inline]
    pub fn add_scaled(&mut self, red: f64, green: f64, blue: f64, weight: f64) {
        self.red += weight * red;
        self.green += weight * green;
        self.blue += weight * blue;
    }
}

#[derive(Clone, Debug)]
pub struct RgbImageF64 {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: Vec<RgbF64>,
}

impl RgbImageF64 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![RgbF64::default(); w * h],
        }
    }
}

impl ImageView for RgbImageF64 {
    type Pixel = RgbF64;

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
    fn row(&self, y: usize) -> &[RgbF64] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for RgbImageF64 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [RgbF64] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
