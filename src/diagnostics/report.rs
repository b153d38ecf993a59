use super::timing::{StageTiming, TimingBreakdown};
use crate::graph::CoveredRect;
use crate::types::GridPoint;
use serde::Serialize;

/// Summary of one committed livewire segment.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSummary {
    pub from: GridPoint,
    pub to: GridPoint,
    pub length: usize,
    pub cost: f64,
}

/// Serializable trace of a selection session for tooling.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub image_width: usize,
    pub image_height: usize,
    pub covered: CoveredRect,
    pub anchors: Vec<GridPoint>,
    pub closed: bool,
    pub segments: Vec<SegmentSummary>,
    pub boundary_length: usize,
    /// Longest segment solve, if any segment was committed.
    pub slowest_solve: Option<StageTiming>,
    pub timing: TimingBreakdown,
}
