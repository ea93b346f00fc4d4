use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the detection pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
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

/// Aggregated timing trace for one detector run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Append another breakdown's stages, prefixing their labels.
    pub fn extend_prefixed(&mut self, prefix: &str, other: &TimingBreakdown) {
        for stage in &other.stages {
            self.push(format!("{prefix}.{}", stage.label), stage.elapsed_ms);
        }
    }

    /// Sum of all stages whose label starts with `prefix`.
    pub fn sum_prefixed(&self, prefix: &str) -> f64 {
        self.stages
            .iter()
            .filter(|s| s.label.starts_with(prefix))
            .map(|s| s.elapsed_ms)
            .sum()
    }
}
