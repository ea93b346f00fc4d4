#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod layout;
pub mod measure;
pub mod types;

// Stage modules: public for tools and tests, signatures may still move.
pub mod edges;
pub mod hough;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{CircleDetector, DetectorParams};
pub use crate::error::DetectError;
pub use crate::types::{Circle, RadiusWindow};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace, SearchOutcome};

// Post-processing helpers.
pub use crate::layout::MarkerLayout;
pub use crate::measure::{format_report, DistanceCalculator, PairDistance};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use marker_detector::prelude::*;
///
/// # fn main() -> Result<(), DetectError> {
/// let (w, h) = (320usize, 240usize);
/// let rgb = vec![255u8; 3 * w * h];
/// let img = ImageRgb8::packed(w, h, &rgb);
///
/// let det = CircleDetector::new(DetectorParams {
///     expected_circles: 2,
///     ..Default::default()
/// });
///
/// let circles = det.detect(&img)?;
/// println!("found={}", circles.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgb8;
    pub use crate::{Circle, CircleDetector, DetectError, DetectorParams};
}
