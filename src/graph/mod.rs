//! Grid graph over the pixel lattice.
//!
//! One node per covered pixel, 4-connected, with weights from the edge-cost
//! transform. `window` decides which pixels are covered; `build` materialises
//! the adjacency lists.

pub mod build;
pub mod window;

pub use build::{Edge, GridGraph};
pub use window::{CoveredRect, Viewport, VIEWPORT_COLS, VIEWPORT_ROWS};
