#![doc = include_str!("../README.md")]

// Core: image model, edge costs, graph and solver.
pub mod energy;
pub mod error;
pub mod graph;
pub mod image;
pub mod smoothing;
pub mod solver;
pub mod types;

// Session layer and tooling support.
pub mod config;
pub mod diagnostics;
pub mod session;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::ScissorsError;
pub use crate::graph::{CoveredRect, Edge, GridGraph, Viewport};
pub use crate::image::{Rgb, RgbImage};
pub use crate::session::{SelectionSession, SessionOptions};
pub use crate::smoothing::{gaussian_smooth, SmoothingOptions};
pub use crate::solver::{shortest_path, SolverWorkspace};
pub use crate::types::{GridPoint, LivewirePath};

pub use crate::diagnostics::SessionReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use livewire::prelude::*;
///
/// let img = RgbImage::filled(8, 8, Rgb::BLACK);
/// let graph = GridGraph::build(&img, Viewport::default()).unwrap();
/// let path = shortest_path(&graph, GridPoint::new(0, 0), GridPoint::new(7, 7)).unwrap();
/// assert_eq!(path.len(), 15);
/// ```
pub mod prelude {
    pub use crate::{
        shortest_path, GridGraph, GridPoint, LivewirePath, Rgb, RgbImage, SelectionSession,
        SessionOptions, Viewport,
    };
}
