//! Per-pixel edge strength: luminance differences against the right and
//! bottom neighbours, turned into crossing energies and graph weights.
//!
//! - `luminance`: forward-difference gradient `(dX, dY)` on the fixed
//!   `0.21·R + 0.72·G + 0.07·B` brightness.
//! - `cost`: rotates the gradient by 90° so the energy lands on the axis an
//!   edge runs along, and inverts energies into strictly positive weights.
//!
//! Borders have no forward neighbour: the last column has `dX = 0`, the last
//! row has `dY = 0`.

pub mod cost;
pub mod luminance;

pub use cost::{edge_weight, pixel_energy, EdgeEnergy, EPSILON};
pub use luminance::{gradient_at, Gradient};
