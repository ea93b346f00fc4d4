//! Diagnostics data model exposed by the detector and the tool binaries.
//!
//! `DetectionReport` is the main entry point: the final circles, how the
//! radius search ended, and a `PipelineTrace` with the edge-stage summary,
//! every search attempt and a labelled timing breakdown.

pub mod pipeline;
pub mod timing;

pub use pipeline::{
    AttemptTrace, DetectionReport, EdgeStage, InputDescriptor, PipelineTrace, SearchOutcome,
};
pub use timing::{StageTiming, TimingBreakdown};
