//! Selection session: owns the (optionally smoothed) image, the grid graph
//! built from it, and the chain of anchors placed by the user.
//!
//! The graph is built once when the session starts and replaced wholesale by
//! [`SelectionSession::rebuild`]; solves only read it. Anchors and returned
//! paths are in image-global coordinates.
use crate::diagnostics::{SegmentSummary, SessionReport, TimingBreakdown};
use crate::error::ScissorsError;
use crate::graph::{GridGraph, Viewport};
use crate::image::RgbImage;
use crate::smoothing::{gaussian_smooth, SmoothingOptions};
use crate::solver::SolverWorkspace;
use crate::types::{GridPoint, LivewirePath};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Spacing used when no anchors-per-100px density is configured.
pub const DEFAULT_AUTO_ANCHOR_SPACING: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Gaussian pre-filter; `None` traces on the raw pixels.
    pub smoothing: Option<SmoothingOptions>,
    /// Visible origin for images larger than the viewport cap.
    pub viewport: Viewport,
    /// Per-axis cursor displacement (pixels) that commits a new anchor in
    /// [`SelectionSession::auto_anchor`].
    pub auto_anchor_spacing: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            smoothing: None,
            viewport: Viewport::default(),
            auto_anchor_spacing: DEFAULT_AUTO_ANCHOR_SPACING,
        }
    }
}

impl SessionOptions {
    pub fn with_smoothing(mut self, smoothing: SmoothingOptions) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Spacing from an "anchors per 100 pixels" density.
    pub fn with_anchor_density(mut self, anchors_per_100px: usize) -> Self {
        self.auto_anchor_spacing = 100 / anchors_per_100px.max(1);
        self
    }
}

pub struct SelectionSession {
    image: RgbImage,
    options: SessionOptions,
    graph: GridGraph,
    workspace: SolverWorkspace,
    anchors: Vec<GridPoint>,
    segments: Vec<LivewirePath>,
    closed: bool,
    timing: TimingBreakdown,
}

impl SelectionSession {
    /// Smooth `image` if requested and build the graph for the configured
    /// viewport.
    pub fn new(image: RgbImage, options: SessionOptions) -> Result<Self, ScissorsError> {
        let mut timing = TimingBreakdown::default();
        let image = match options.smoothing {
            Some(smoothing) => {
                let start = Instant::now();
                let smoothed = gaussian_smooth(&image, smoothing)?;
                timing.push("smooth", start.elapsed().as_secs_f64() * 1000.0);
                smoothed
            }
            None => image,
        };
        let graph = GridGraph::build(&image, options.viewport)?;
        timing.push("graph", graph.build_ms());
        Ok(Self {
            image,
            options,
            graph,
            workspace: SolverWorkspace::new(),
            anchors: Vec::new(),
            segments: Vec::new(),
            closed: false,
            timing,
        })
    }

    /// Start a fresh selection on a graph built for `viewport`.
    pub fn rebuild(&mut self, viewport: Viewport) -> Result<(), ScissorsError> {
        self.graph = GridGraph::build(&self.image, viewport)?;
        self.options.viewport = viewport;
        self.timing.push("graph", self.graph.build_ms());
        self.reset();
        Ok(())
    }

    /// Forget all anchors and segments, keeping the graph.
    pub fn reset(&mut self) {
        self.anchors.clear();
        self.segments.clear();
        self.closed = false;
    }

    /// The image the graph was built from (after smoothing).
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn anchors(&self) -> &[GridPoint] {
        &self.anchors
    }

    pub fn segments(&self) -> &[LivewirePath] {
        &self.segments
    }

    pub fn last_anchor(&self) -> Option<GridPoint> {
        self.anchors.last().copied()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn timing(&self) -> &TimingBreakdown {
        &self.timing
    }

    fn ensure_open(&self) -> Result<(), ScissorsError> {
        if self.closed {
            Err(ScissorsError::SessionClosed)
        } else {
            Ok(())
        }
    }

    fn ensure_covered(&self, p: GridPoint) -> Result<(), ScissorsError> {
        if self.graph.contains(p) {
            Ok(())
        } else {
            Err(ScissorsError::AnchorOutsideGraph {
                row: p.row,
                col: p.col,
            })
        }
    }

    fn commit(&mut self, from: GridPoint, to: GridPoint) -> Result<&LivewirePath, ScissorsError> {
        let path = self.workspace.solve(&self.graph, from, to)?;
        let label = format!("solve[{}]", self.segments.len());
        self.timing.push(label, self.workspace.last_stats().elapsed_ms);
        self.segments.push(path);
        Ok(&self.segments[self.segments.len() - 1])
    }

    /// Place an anchor. The first anchor starts the chain; later anchors
    /// commit the segment from the previous anchor. Re-placing the previous
    /// anchor is a no-op.
    pub fn place_anchor(&mut self, p: GridPoint) -> Result<Option<&LivewirePath>, ScissorsError> {
        self.ensure_open()?;
        self.ensure_covered(p)?;
        let Some(last) = self.last_anchor() else {
            debug!("selection started at ({}, {})", p.row, p.col);
            self.anchors.push(p);
            return Ok(None);
        };
        if last == p {
            return Ok(None);
        }
        self.anchors.push(p);
        self.commit(last, p).map(Some)
    }

    /// Live preview from the last anchor to `cursor`; nothing is committed.
    pub fn livewire(&mut self, cursor: GridPoint) -> Result<LivewirePath, ScissorsError> {
        self.ensure_open()?;
        let last = self.last_anchor().ok_or(ScissorsError::NoActiveAnchor)?;
        self.workspace.solve(&self.graph, last, cursor)
    }

    /// Commit an anchor at `cursor` once it is more than the configured
    /// spacing away from the last anchor on either axis.
    pub fn auto_anchor(&mut self, cursor: GridPoint) -> Result<Option<&LivewirePath>, ScissorsError> {
        self.ensure_open()?;
        let last = self.last_anchor().ok_or(ScissorsError::NoActiveAnchor)?;
        if last.chebyshev(cursor) <= self.options.auto_anchor_spacing {
            return Ok(None);
        }
        self.place_anchor(cursor)
    }

    /// Connect the last anchor back to the first one and end the selection.
    /// Returns the closed boundary.
    pub fn close(&mut self) -> Result<Vec<GridPoint>, ScissorsError> {
        self.ensure_open()?;
        let first = *self.anchors.first().ok_or(ScissorsError::NoActiveAnchor)?;
        let last = self.last_anchor().ok_or(ScissorsError::NoActiveAnchor)?;
        if first != last {
            self.commit(last, first)?;
        }
        self.closed = true;
        let boundary = self.boundary();
        debug!(
            "selection closed: anchors={} segments={} boundary={}",
            self.anchors.len(),
            self.segments.len(),
            boundary.len()
        );
        Ok(boundary)
    }

    /// Committed segments joined into one point chain, without repeating the
    /// shared anchor between consecutive segments.
    pub fn boundary(&self) -> Vec<GridPoint> {
        let mut out: Vec<GridPoint> = Vec::new();
        for seg in &self.segments {
            let skip = usize::from(out.last().is_some() && out.last() == seg.points.first());
            out.extend_from_slice(&seg.points[skip..]);
        }
        if out.is_empty() {
            out.extend(self.anchors.first().copied());
        }
        out
    }

    /// Total weight of all committed segments.
    pub fn boundary_cost(&self) -> f64 {
        self.segments.iter().map(|s| s.cost).sum()
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            image_width: self.image.w,
            image_height: self.image.h,
            covered: self.graph.rect(),
            anchors: self.anchors.clone(),
            closed: self.closed,
            segments: self
                .segments
                .iter()
                .filter_map(|s| {
                    Some(SegmentSummary {
                        from: s.first()?,
                        to: s.last()?,
                        length: s.len(),
                        cost: s.cost,
                    })
                })
                .collect(),
            boundary_length: self.boundary().len(),
            slowest_solve: self.timing.slowest("solve").cloned(),
            timing: self.timing.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Rgb;

    fn square_session() -> SelectionSession {
        // Bright 4x4 square on a dark 10x10 background.
        let mut img = RgbImage::filled(10, 10, Rgb::BLACK);
        for y in 3..7 {
            for x in 3..7 {
                img.set(x, y, Rgb::WHITE);
            }
        }
        SelectionSession::new(img, SessionOptions::default()).unwrap()
    }

    #[test]
    fn first_anchor_only_starts_the_chain() {
        let mut s = square_session();
        assert!(s.place_anchor(GridPoint::new(3, 3)).unwrap().is_none());
        assert_eq!(s.anchors(), &[GridPoint::new(3, 3)]);
        assert!(s.segments().is_empty());
        assert!(s.place_anchor(GridPoint::new(3, 3)).unwrap().is_none());
        assert_eq!(s.anchors().len(), 1);
    }

    #[test]
    fn livewire_needs_an_anchor_and_does_not_commit() {
        let mut s = square_session();
        assert_eq!(
            s.livewire(GridPoint::new(1, 1)),
            Err(ScissorsError::NoActiveAnchor)
        );
        s.place_anchor(GridPoint::new(0, 0)).unwrap();
        let preview = s.livewire(GridPoint::new(2, 2)).unwrap();
        assert_eq!(preview.first(), Some(GridPoint::new(0, 0)));
        assert_eq!(preview.last(), Some(GridPoint::new(2, 2)));
        assert!(s.segments().is_empty());
    }

    #[test]
    fn auto_anchor_respects_spacing() {
        let mut s = square_session();
        s.options.auto_anchor_spacing = 3;
        s.place_anchor(GridPoint::new(0, 0)).unwrap();
        assert!(s.auto_anchor(GridPoint::new(3, 2)).unwrap().is_none());
        let seg = s.auto_anchor(GridPoint::new(4, 0)).unwrap().cloned();
        assert_eq!(seg.and_then(|p| p.last()), Some(GridPoint::new(4, 0)));
        assert_eq!(s.last_anchor(), Some(GridPoint::new(4, 0)));
    }

    #[test]
    fn anchor_density_maps_to_spacing() {
        assert_eq!(SessionOptions::default().with_anchor_density(4).auto_anchor_spacing, 25);
        assert_eq!(SessionOptions::default().with_anchor_density(0).auto_anchor_spacing, 100);
    }

    #[test]
    fn closing_joins_back_to_first_anchor() {
        let mut s = square_session();
        for p in [(3, 3), (3, 6), (6, 6), (6, 3)] {
            s.place_anchor(GridPoint::from(p)).unwrap();
        }
        let boundary = s.close().unwrap();
        assert!(s.is_closed());
        assert_eq!(s.segments().len(), 4);
        assert_eq!(boundary.first(), Some(&GridPoint::new(3, 3)));
        assert_eq!(boundary.last(), Some(&GridPoint::new(3, 3)));
        for pair in boundary.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1, "gap in boundary at {:?}", pair);
        }
        assert_eq!(
            s.place_anchor(GridPoint::new(0, 0)),
            Err(ScissorsError::SessionClosed)
        );
        let report = s.report();
        assert!(report.closed);
        assert_eq!(report.segments.len(), 4);
        assert_eq!(report.boundary_length, boundary.len());
        let slowest = report.slowest_solve.expect("four solves were timed");
        assert!(slowest.label.starts_with("solve["));
        assert!(report
            .timing
            .stages
            .iter()
            .all(|t| !t.label.starts_with("solve") || t.elapsed_ms <= slowest.elapsed_ms));
    }

    #[test]
    fn anchors_outside_the_image_are_rejected() {
        let mut s = square_session();
        assert_eq!(
            s.place_anchor(GridPoint::new(10, 0)).unwrap_err(),
            ScissorsError::AnchorOutsideGraph { row: 10, col: 0 }
        );
    }

    #[test]
    fn rebuild_starts_a_new_selection() {
        let mut s = square_session();
        s.place_anchor(GridPoint::new(0, 0)).unwrap();
        s.place_anchor(GridPoint::new(5, 5)).unwrap();
        s.rebuild(Viewport::default()).unwrap();
        assert!(s.anchors().is_empty());
        assert!(s.segments().is_empty());
        assert_eq!(s.timing().stages.iter().filter(|t| t.label == "graph").count(), 2);
    }

    #[test]
    fn invalid_smoothing_is_rejected() {
        let img = RgbImage::filled(4, 4, Rgb::gray(10));
        let opts = SessionOptions::default().with_smoothing(SmoothingOptions::new(3, 0.0));
        assert!(matches!(
            SelectionSession::new(img, opts),
            Err(ScissorsError::InvalidFilter { .. })
        ));
    }
}
