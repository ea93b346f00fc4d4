//! Canny-style edge extraction built from scratch.
//!
//! Stages, in order:
//!
//! - `gray`: RGB → intensity `(R + G + B) / 3`.
//! - `blur`: fixed 5×5 binomial Gaussian with replicated borders, truncated.
//! - `grad`: central-difference gradient magnitude and direction.
//! - `nms`: direction-aligned non-maximum suppression (ties survive).
//! - `hysteresis`: strong seeds grown through weak 8-connected pixels.
//!
//! The edge set does not depend on the Hough radius window, so callers compute
//! it once per image and reuse it across radius-search attempts.

pub mod blur;
pub mod grad;
pub mod gray;
pub mod hysteresis;
pub mod nms;

pub use blur::gaussian_blur_5x5;
pub use grad::{central_gradients, GradientMap};
pub use gray::to_intensity;
pub use hysteresis::{link_edges, strong_seeds, EdgeSet, HysteresisThresholds};
pub use nms::{direction_bin, suppress_non_maxima, DirectionBin};

use crate::diagnostics::TimingBreakdown;
use crate::error::DetectError;
use crate::image::ImageRgb8;
use std::time::Instant;

/// Output of the full edge stage, kept for diagnostics.
#[derive(Clone, Debug)]
pub struct EdgeDetection {
    pub edges: EdgeSet,
    /// Gradient map after suppression.
    pub grad: GradientMap,
    pub strong_count: usize,
    pub suppressed_count: usize,
    pub timings: TimingBreakdown,
}

/// Run grayscale → blur → gradient → suppression → hysteresis on `image`.
pub fn detect_edges(
    image: &ImageRgb8<'_>,
    thresholds: HysteresisThresholds,
) -> Result<EdgeDetection, DetectError> {
    let total_start = Instant::now();
    let mut timings = TimingBreakdown::default();

    let start = Instant::now();
    let gray = to_intensity(image)?;
    timings.push("grayscale", elapsed_ms(start));

    let start = Instant::now();
    let blurred = gaussian_blur_5x5(&gray);
    timings.push("blur", elapsed_ms(start));

    let start = Instant::now();
    let mut grad = central_gradients(&blurred);
    timings.push("gradient", elapsed_ms(start));

    let start = Instant::now();
    let suppressed_count = suppress_non_maxima(&mut grad);
    timings.push("nms", elapsed_ms(start));

    let start = Instant::now();
    let strong_count = strong_seeds(&grad.mag, thresholds.high).len();
    let edges = link_edges(&grad.mag, thresholds);
    timings.push("hysteresis", elapsed_ms(start));

    timings.total_ms = elapsed_ms(total_start);
    Ok(EdgeDetection {
        edges,
        grad,
        strong_count,
        suppressed_count,
        timings,
    })
}

#[inline]
pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
