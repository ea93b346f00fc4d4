use crate::detector::Adjustment;
use crate::diagnostics::TimingBreakdown;
use crate::types::{Circle, RadiusWindow};
use serde::Serialize;

/// Result produced by [`CircleDetector::process_with_diagnostics`](crate::CircleDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    /// Circles of the final attempt, strongest first.
    pub circles: Vec<Circle>,
    pub outcome: SearchOutcome,
    pub trace: PipelineTrace,
}

impl DetectionReport {
    pub fn converged(&self) -> bool {
        self.outcome == SearchOutcome::Converged
    }
}

/// How the radius search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchOutcome {
    /// The final attempt found exactly the expected number of circles.
    Converged,
    /// The attempt ceiling was reached first.
    NonConverged,
    /// Edge linking produced no pixels; no window can yield circles.
    NoEdges,
}

/// End-to-end trace describing the internal execution of the detector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub edges: EdgeStage,
    pub attempts: Vec<AttemptTrace>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub expected_circles: usize,
}

/// Summary of the edge stage (computed once, shared by all attempts).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStage {
    pub suppressed: usize,
    pub strong: usize,
    pub linked: usize,
    pub elapsed_ms: f64,
}

/// One voting + selection pass of the radius search.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptTrace {
    pub index: usize,
    pub window: RadiusWindow,
    /// How `window` was derived from the initial one.
    pub adjustment: Adjustment,
    pub accumulator_keys: usize,
    pub circles_found: usize,
    pub elapsed_ms: f64,
}
