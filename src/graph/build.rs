use super::window::{CoveredRect, Viewport};
use crate::energy::cost::energy_at;
use crate::error::ScissorsError;
use crate::image::{ImageView, RgbImage};
use crate::types::GridPoint;
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Directed adjacency entry: crossing to `target` costs `weight`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Edge {
    pub weight: f64,
    /// Neighbour in image-global coordinates
    pub target: GridPoint,
}

/// 4-connected pixel graph over a covered rectangle of the image.
///
/// Nodes are stored row-major in rectangle-local order; every edge is listed
/// from both endpoints with the same weight. The graph is immutable once
/// built and is rebuilt whenever the image, its smoothing, or the window
/// changes.
#[derive(Clone, Debug)]
pub struct GridGraph {
    rect: CoveredRect,
    adjacency: Vec<Vec<Edge>>,
    build_ms: f64,
}

impl GridGraph {
    /// Build the graph for `image` as seen through `viewport`.
    pub fn build(image: &RgbImage, viewport: Viewport) -> Result<Self, ScissorsError> {
        let rect = CoveredRect::for_viewport(image.h, image.w, viewport);
        Self::build_in(image, rect)
    }

    /// Build the graph over the whole image.
    pub fn build_full(image: &RgbImage) -> Result<Self, ScissorsError> {
        Self::build_in(image, CoveredRect::full(image.h, image.w))
    }

    /// Build the graph over `rect`, which must lie inside the image.
    ///
    /// Each covered pixel links right with weight `1/(energyX+ε)` unless it
    /// is in the last covered column, and down with `1/(energyY+ε)` unless it
    /// is in the last covered row. Energies use the full image, so pixels on
    /// the window border still see their real right/bottom neighbours.
    pub fn build_in(image: &RgbImage, rect: CoveredRect) -> Result<Self, ScissorsError> {
        if image.is_empty() || rect.is_empty() {
            return Err(ScissorsError::ImageNotLoaded);
        }
        if rect.row_end() > image.h || rect.col_end() > image.w {
            return Err(ScissorsError::PixelOutOfBounds {
                row: rect.row_end() - 1,
                col: rect.col_end() - 1,
            });
        }
        let start = Instant::now();
        let mut adjacency: Vec<Vec<Edge>> = (0..rect.len()).map(|_| Vec::with_capacity(4)).collect();

        for r in 0..rect.rows {
            for c in 0..rect.cols {
                let last_col = c + 1 == rect.cols;
                let last_row = r + 1 == rect.rows;
                if last_col && last_row {
                    continue;
                }
                let here = GridPoint::new(rect.row + r, rect.col + c);
                let energy = energy_at(image, here.col, here.row);
                let idx = r * rect.cols + c;
                if !last_col {
                    let right = GridPoint::new(here.row, here.col + 1);
                    link(&mut adjacency, idx, here, idx + 1, right, energy.weight_x());
                }
                if !last_row {
                    let down = GridPoint::new(here.row + 1, here.col);
                    link(&mut adjacency, idx, here, idx + rect.cols, down, energy.weight_y());
                }
            }
        }

        let build_ms = start.elapsed().as_secs_f64() * 1000.0;
        let graph = Self {
            rect,
            adjacency,
            build_ms,
        };
        debug!(
            "GridGraph::build rect=({}, {}) {}x{} nodes={} edges={} in {:.3} ms",
            rect.row,
            rect.col,
            rect.rows,
            rect.cols,
            graph.node_count(),
            graph.edge_count(),
            build_ms
        );
        Ok(graph)
    }

    #[inline]
    pub fn rect(&self) -> CoveredRect {
        self.rect
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    #[inline]
    pub fn contains(&self, p: GridPoint) -> bool {
        self.rect.contains(p)
    }

    #[inline]
    pub fn index_of(&self, p: GridPoint) -> Option<usize> {
        self.rect.index_of(p)
    }

    #[inline]
    pub fn point_at(&self, idx: usize) -> GridPoint {
        self.rect.point_at(idx)
    }

    /// Adjacency list of a global point, `None` outside the covered rectangle.
    pub fn neighbors(&self, p: GridPoint) -> Option<&[Edge]> {
        self.index_of(p).map(|i| self.adjacency[i].as_slice())
    }

    #[inline]
    pub(crate) fn neighbors_at(&self, idx: usize) -> &[Edge] {
        &self.adjacency[idx]
    }

    /// Weight of the edge `a → b`, if they are adjacent.
    pub fn weight(&self, a: GridPoint, b: GridPoint) -> Option<f64> {
        self.neighbors(a)?
            .iter()
            .find(|e| e.target == b)
            .map(|e| e.weight)
    }

    /// Total weight along consecutive points, `None` if two are not adjacent.
    pub fn path_cost(&self, points: &[GridPoint]) -> Option<f64> {
        points
            .windows(2)
            .map(|pair| self.weight(pair[0], pair[1]))
            .sum()
    }

    /// Wall time spent building the graph.
    pub fn build_ms(&self) -> f64 {
        self.build_ms
    }
}

#[inline]
fn link(
    adjacency: &mut [Vec<Edge>],
    a_idx: usize,
    a: GridPoint,
    b_idx: usize,
    b: GridPoint,
    weight: f64,
) {
    adjacency[a_idx].push(Edge { weight, target: b });
    adjacency[b_idx].push(Edge { weight, target: a });
}
