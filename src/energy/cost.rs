use super::luminance::{gradient_at, Gradient};
use crate::error::ScissorsError;
use crate::image::{ImageView, RgbImage};
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

/// Additive guard in `1 / (energy + EPSILON)`.
pub const EPSILON: f64 = 1e-7;

/// Crossing energies on the two grid edges leaving a pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct EdgeEnergy {
    /// Energy on the edge to the right neighbour
    pub x: f64,
    /// Energy on the edge to the bottom neighbour
    pub y: f64,
}

impl EdgeEnergy {
    /// Rotate the gradient direction by 90° and project its magnitude on
    /// both axes.
    pub fn from_gradient(g: Gradient) -> Self {
        let magnitude = g.magnitude();
        let rotated = g.angle() + FRAC_PI_2;
        Self {
            x: (magnitude * rotated.cos()).abs(),
            y: (magnitude * rotated.sin()).abs(),
        }
    }

    /// Weight of the right edge.
    #[inline]
    pub fn weight_x(&self) -> f64 {
        edge_weight(self.x)
    }

    /// Weight of the down edge.
    #[inline]
    pub fn weight_y(&self) -> f64 {
        edge_weight(self.y)
    }
}

/// Strong edges are cheap, flat regions cost `1 / EPSILON`.
#[inline]
pub fn edge_weight(energy: f64) -> f64 {
    1.0 / (energy + EPSILON)
}

#[inline]
pub(crate) fn energy_at(image: &RgbImage, x: usize, y: usize) -> EdgeEnergy {
    EdgeEnergy::from_gradient(gradient_at(image, x, y))
}

/// Edge energies of pixel `(x, y)`.
pub fn pixel_energy(image: &RgbImage, x: usize, y: usize) -> Result<EdgeEnergy, ScissorsError> {
    if image.is_empty() {
        return Err(ScissorsError::ImageNotLoaded);
    }
    if !image.contains(x, y) {
        return Err(ScissorsError::PixelOutOfBounds { row: y, col: x });
    }
    Ok(energy_at(image, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Rgb;

    #[test]
    fn rotation_swaps_axes() {
        // A purely horizontal luminance change loads the vertical edge.
        let e = EdgeEnergy::from_gradient(Gradient { dx: 10.0, dy: 0.0 });
        assert!(e.x < 1e-9, "x={}", e.x);
        assert!((e.y - 10.0).abs() < 1e-9, "y={}", e.y);

        let e = EdgeEnergy::from_gradient(Gradient { dx: 0.0, dy: -4.0 });
        assert!((e.x - 4.0).abs() < 1e-9, "x={}", e.x);
        assert!(e.y < 1e-9, "y={}", e.y);
    }

    #[test]
    fn flat_energy_maps_to_inverse_epsilon() {
        let w = edge_weight(0.0);
        assert!((w - 1.0 / EPSILON).abs() < 1e-3);
        assert!(edge_weight(255.0) < 1.0);
        assert!(edge_weight(1e9).is_finite() && edge_weight(1e9) > 0.0);
    }

    #[test]
    fn empty_image_is_not_loaded() {
        let img = RgbImage::new(0, 0);
        assert_eq!(
            pixel_energy(&img, 0, 0),
            Err(ScissorsError::ImageNotLoaded)
        );
        let img = RgbImage::filled(2, 2, Rgb::gray(9));
        assert_eq!(
            pixel_energy(&img, 2, 0),
            Err(ScissorsError::PixelOutOfBounds { row: 0, col: 2 })
        );
    }

    #[test]
    fn boundary_pixels_lose_the_missing_component() {
        let mut img = RgbImage::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                img.set(x, y, Rgb::gray(((x * 3 + y) * 20) as u8));
            }
        }
        // Last column: dX = 0, so only the vertical difference carries energy
        // and it lands on the right edge.
        for y in 0..2 {
            let e = pixel_energy(&img, 2, y).unwrap();
            assert!(e.y < 1e-9, "row {y}: y={}", e.y);
            assert!((e.x - gradient_at(&img, 2, y).dy.abs()).abs() < 1e-9);
        }
        // Last row: dY = 0.
        for x in 0..2 {
            let e = pixel_energy(&img, x, 2).unwrap();
            assert!(e.x < 1e-9, "col {x}: x={}", e.x);
        }
        let corner = pixel_energy(&img, 2, 2).unwrap();
        assert_eq!(corner.x, 0.0);
        assert_eq!(corner.y, 0.0);
    }
}
