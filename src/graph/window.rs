//! Covered rectangle of the grid graph.
//!
//! Oversized images only get a `VIEWPORT_ROWS × VIEWPORT_COLS` window, placed
//! at the negated viewport origin (the scroll offset of the displayed image).
//! Images that fit are always covered entirely.
use crate::types::GridPoint;
use log::warn;
use serde::{Deserialize, Serialize};

/// Maximum number of rows covered by one graph.
pub const VIEWPORT_ROWS: usize = 520;
/// Maximum number of columns covered by one graph.
pub const VIEWPORT_COLS: usize = 570;

/// Origin of the displayed image relative to the visible area.
///
/// Scrolling right/down moves the image left/up, so both components are
/// zero or negative in practice; the covered window starts at `(-y, -x)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Horizontal origin in pixels
    pub x: i64,
    /// Vertical origin in pixels
    pub y: i64,
}

impl Viewport {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Viewport whose visible area starts at image pixel `(row, col)`.
    pub fn scrolled_to(row: usize, col: usize) -> Self {
        Self {
            x: -(col as i64),
            y: -(row as i64),
        }
    }
}

/// Axis-aligned block of image pixels covered by a graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoveredRect {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl CoveredRect {
    pub fn full(height: usize, width: usize) -> Self {
        Self {
            row: 0,
            col: 0,
            rows: height,
            cols: width,
        }
    }

    /// Rectangle for an image of `height × width` seen through `viewport`.
    ///
    /// The window is capped at `VIEWPORT_ROWS × VIEWPORT_COLS` and shifted so
    /// it never leaves the image.
    pub fn for_viewport(height: usize, width: usize, viewport: Viewport) -> Self {
        if height <= VIEWPORT_ROWS && width <= VIEWPORT_COLS {
            return Self::full(height, width);
        }
        let rows = height.min(VIEWPORT_ROWS);
        let cols = width.min(VIEWPORT_COLS);
        let (start_row, start_col) = (viewport.y.saturating_neg(), viewport.x.saturating_neg());
        let row = clamp_origin(start_row, height - rows);
        let col = clamp_origin(start_col, width - cols);
        if row as i64 != start_row || col as i64 != start_col {
            warn!(
                "viewport origin ({}, {}) clamped to window start ({row}, {col})",
                viewport.x, viewport.y
            );
        }
        Self {
            row,
            col,
            rows,
            cols,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last covered row, exclusive.
    #[inline]
    pub fn row_end(&self) -> usize {
        self.row + self.rows
    }

    /// Last covered column, exclusive.
    #[inline]
    pub fn col_end(&self) -> usize {
        self.col + self.cols
    }

    #[inline]
    pub fn contains(&self, p: GridPoint) -> bool {
        p.row >= self.row && p.row < self.row_end() && p.col >= self.col && p.col < self.col_end()
    }

    /// Window-local coordinates of a global point.
    pub fn to_local(&self, p: GridPoint) -> Option<GridPoint> {
        self.contains(p)
            .then(|| GridPoint::new(p.row - self.row, p.col - self.col))
    }

    /// Global coordinates of a window-local point.
    pub fn to_global(&self, local: GridPoint) -> GridPoint {
        GridPoint::new(local.row + self.row, local.col + self.col)
    }

    /// Row-major node index of a global point.
    #[inline]
    pub fn index_of(&self, p: GridPoint) -> Option<usize> {
        self.contains(p)
            .then(|| (p.row - self.row) * self.cols + (p.col - self.col))
    }

    /// Global point of a node index.
    #[inline]
    pub fn point_at(&self, idx: usize) -> GridPoint {
        GridPoint::new(self.row + idx / self.cols, self.col + idx % self.cols)
    }
}

fn clamp_origin(start: i64, max_start: usize) -> usize {
    start.clamp(0, max_start as i64) as usize
}
