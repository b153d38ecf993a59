use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of a tracing run, such as the
/// smoothing pass, the graph build or one segment solve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for a selection session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Record a stage and add it to the total.
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Slowest stage whose label starts with `prefix`.
    pub fn slowest(&self, prefix: &str) -> Option<&StageTiming> {
        self.stages
            .iter()
            .filter(|s| s.label.starts_with(prefix))
            .max_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms))
    }
}
