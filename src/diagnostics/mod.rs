//! Diagnostics data model exposed by the selection session and the demo tools.
//!
//! `SessionReport` bundles the covered window, the anchor chain, per-segment
//! lengths and costs, and a `TimingBreakdown` of smoothing, graph build and
//! every solve.

pub mod report;
pub mod timing;

pub use report::{SegmentSummary, SessionReport};
pub use timing::{StageTiming, TimingBreakdown};
