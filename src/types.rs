use serde::{Deserialize, Serialize};

/// A pixel coordinate in image-global space, `(row, col)` with the origin at
/// the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    pub row: usize,
    pub col: usize,
}

impl GridPoint {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Largest per-axis displacement between two points.
    pub fn chebyshev(self, other: GridPoint) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    pub fn manhattan(self, other: GridPoint) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for GridPoint {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// One livewire segment: an ordered source→destination pixel chain and the
/// accumulated edge weight along it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LivewirePath {
    pub points: Vec<GridPoint>,
    pub cost: f64,
}

impl LivewirePath {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<GridPoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<GridPoint> {
        self.points.last().copied()
    }

    /// True when the solve produced only the destination even though source
    /// and destination differ, i.e. the destination was not reachable.
    pub fn is_degenerate(&self, source: GridPoint) -> bool {
        self.points.len() == 1 && self.points[0] != source
    }
}
