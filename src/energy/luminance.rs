use crate::image::{ImageView, RgbImage};
use serde::Serialize;

/// Forward-difference luminance gradient at one pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Gradient {
    /// `lum(self) - lum(right)`, zero on the last column
    pub dx: f64,
    /// `lum(self) - lum(down)`, zero on the last row
    pub dy: f64,
}

impl Gradient {
    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.dy.atan2(self.dx)
    }
}

/// Gradient of pixel `(x, y)` against its right and bottom neighbours.
///
/// Panics if `(x, y)` is outside the image, like slice indexing.
#[inline]
pub fn gradient_at(image: &RgbImage, x: usize, y: usize) -> Gradient {
    let center = image.luminance(x, y);
    let dx = if image.contains(x + 1, y) {
        center - image.luminance(x + 1, y)
    } else {
        0.0
    };
    let dy = if image.contains(x, y + 1) {
        center - image.luminance(x, y + 1)
    } else {
        0.0
    };
    Gradient { dx, dy }
}
