//! Detector pipeline orchestrating edge extraction and the radius search.
//!
//! The [`CircleDetector`] exposes a simple API: feed an RGB view and get the
//! detected circles, strongest first. Internally it validates the parameters,
//! extracts the edge set once, then runs Hough voting + selection for each
//! window proposed by [`RadiusSearch`] until the expected count is reached or
//! the attempt ceiling is hit.
//!
//! Typical usage:
//! ```no_run
//! use marker_detector::{CircleDetector, DetectorParams};
//! use marker_detector::image::ImageRgb8;
//!
//! # fn example(rgb: ImageRgb8) -> Result<(), marker_detector::DetectError> {
//! let detector = CircleDetector::new(DetectorParams::default());
//! let report = detector.process_with_diagnostics(&rgb)?;
//! if report.converged() {
//!     println!("found {} circles", report.circles.len());
//! }
//! # Ok(())
//! # }
//! ```

use super::params::DetectorParams;
use super::search::{Adjustment, RadiusSearch, SearchStep};
use crate::diagnostics::{
    AttemptTrace, DetectionReport, EdgeStage, InputDescriptor, PipelineTrace, SearchOutcome,
    TimingBreakdown,
};
use crate::edges::{detect_edges, elapsed_ms, EdgeDetection, EdgeSet};
use crate::error::DetectError;
use crate::hough::{hough_circles, HoughPass};
use crate::image::ImageRgb8;
use crate::types::{Circle, RadiusWindow};
use log::debug;
use std::time::Instant;

/// Circle detector: Canny-style edges followed by an adaptive Hough search.
#[derive(Clone, Debug)]
pub struct CircleDetector {
    params: DetectorParams,
}

/// Circles and attempt log produced by the radius search on one edge set.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub circles: Vec<Circle>,
    pub outcome: SearchOutcome,
    pub attempts: Vec<AttemptTrace>,
}

impl CircleDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Detect circles, failing with `NonConvergence` when the expected count
    /// is not reached within `max_attempts`.
    ///
    /// An image without any linked edge pixel yields an empty list.
    pub fn detect(&self, image: &ImageRgb8<'_>) -> Result<Vec<Circle>, DetectError> {
        let report = self.process_with_diagnostics(image)?;
        match report.outcome {
            SearchOutcome::Converged | SearchOutcome::NoEdges => Ok(report.circles),
            SearchOutcome::NonConverged => Err(DetectError::NonConvergence {
                expected: self.params.expected_circles,
                attempts: report.trace.attempts.len(),
                last_circles: report.circles,
            }),
        }
    }

    /// Run the full pipeline and capture detailed diagnostics.
    ///
    /// Only malformed parameters or input produce an error; the search outcome
    /// is reported in [`DetectionReport::outcome`].
    pub fn process_with_diagnostics(
        &self,
        image: &ImageRgb8<'_>,
    ) -> Result<DetectionReport, DetectError> {
        self.process_with_edges(image).map(|(report, _)| report)
    }

    /// Like [`Self::process_with_diagnostics`], also handing back the edge
    /// stage output (gradient map and edge set) for debug rendering.
    pub fn process_with_edges(
        &self,
        image: &ImageRgb8<'_>,
    ) -> Result<(DetectionReport, EdgeDetection), DetectError> {
        let total_start = Instant::now();
        self.params.validate()?;
        image.validate()?;
        let limit = radius_limit(image.w, image.h);
        if self.params.max_radius > limit {
            return Err(DetectError::invalid_config(format!(
                "max_radius ({}) exceeds the image diagonal ({limit})",
                self.params.max_radius
            )));
        }

        let detection = detect_edges(image, self.params.thresholds())?;
        debug!(
            "CircleDetector::process edges: suppressed={} strong={} linked={}",
            detection.suppressed_count,
            detection.strong_count,
            detection.edges.len()
        );

        let search_start = Instant::now();
        let search = self.search(&detection.edges);
        let search_ms = elapsed_ms(search_start);

        let mut timings = TimingBreakdown::default();
        timings.extend_prefixed("edges", &detection.timings);
        for attempt in &search.attempts {
            timings.push(format!("hough.attempt{}", attempt.index), attempt.elapsed_ms);
        }
        timings.push("search", search_ms);
        timings.total_ms = elapsed_ms(total_start);

        let report = DetectionReport {
            circles: search.circles,
            outcome: search.outcome,
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: image.w,
                    height: image.h,
                    expected_circles: self.params.expected_circles,
                },
                edges: EdgeStage {
                    suppressed: detection.suppressed_count,
                    strong: detection.strong_count,
                    linked: detection.edges.len(),
                    elapsed_ms: detection.timings.total_ms,
                },
                attempts: search.attempts,
                timings,
            },
        };
        Ok((report, detection))
    }

    /// One voting + selection pass over `window`.
    pub fn detect_in_window(&self, edges: &EdgeSet, window: RadiusWindow) -> HoughPass {
        hough_circles(
            edges,
            window,
            self.params.angular_steps,
            self.params.vote_threshold,
        )
    }

    /// Run the adaptive radius search on a precomputed edge set.
    pub fn search(&self, edges: &EdgeSet) -> SearchResult {
        let mut state = RadiusSearch::new(
            self.params.window(),
            self.params.expected_circles,
            self.params.max_attempts,
        )
        .with_radius_limit(radius_limit(edges.width(), edges.height()));
        let mut attempts = Vec::new();
        let mut window = state.first_window();
        let mut adjustment = Adjustment::Initial;
        loop {
            let start = Instant::now();
            let pass = self.detect_in_window(edges, window);
            let found = pass.circles.len();
            attempts.push(AttemptTrace {
                index: attempts.len(),
                window,
                adjustment,
                accumulator_keys: pass.accumulator_keys,
                circles_found: found,
                elapsed_ms: elapsed_ms(start),
            });
            debug!(
                "CircleDetector::process attempt {} window=[{}, {}] found={} expected={}",
                attempts.len() - 1,
                window.min,
                window.max,
                found,
                self.params.expected_circles
            );

            if edges.is_empty() {
                debug!("CircleDetector::process edge set is empty, stopping search");
                return SearchResult {
                    circles: pass.circles,
                    outcome: SearchOutcome::NoEdges,
                    attempts,
                };
            }

            match state.observe(found) {
                SearchStep::Retry(next) => {
                    window = next;
                    adjustment = state.last_adjustment();
                }
                SearchStep::Converged => {
                    debug_assert!(pass.circles.iter().all(|c| window.contains(c.r)));
                    return SearchResult {
                        circles: pass.circles,
                        outcome: SearchOutcome::Converged,
                        attempts,
                    };
                }
                SearchStep::Exhausted => {
                    debug!(
                        "CircleDetector::process no convergence after {} attempts (last found {})",
                        state.attempts(),
                        found
                    );
                    return SearchResult {
                        circles: pass.circles,
                        outcome: SearchOutcome::NonConverged,
                        attempts,
                    };
                }
            }
        }
    }
}

/// Largest radius worth voting for: the image diagonal, rounded up.
fn radius_limit(w: usize, h: usize) -> u32 {
    let diagonal = (w as f64).hypot(h as f64).ceil();
    if diagonal >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        diagonal as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hough::ring_offsets;

    fn ring_edges(w: usize, h: usize, cx: i32, cy: i32, r: u32) -> EdgeSet {
        let mut set = EdgeSet::new(w, h);
        for o in ring_offsets(RadiusWindow::new(r, r), 100) {
            set.insert((cx + o.dx) as usize, (cy + o.dy) as usize);
        }
        set
    }

    #[test]
    fn invalid_params_fail_before_touching_pixels() {
        let detector = CircleDetector::new(DetectorParams {
            min_radius: 10,
            max_radius: 5,
            ..Default::default()
        });
        let buf = vec![0u8; 3 * 4 * 4];
        let err = detector
            .process_with_diagnostics(&ImageRgb8::packed(4, 4, &buf))
            .unwrap_err();
        assert!(matches!(err, DetectError::InvalidConfig { .. }), "{err}");
    }

    #[test]
    fn search_converges_on_exact_ring() {
        let edges = ring_edges(80, 80, 40, 40, 15);
        let detector = CircleDetector::new(DetectorParams {
            min_radius: 13,
            max_radius: 17,
            expected_circles: 1,
            ..Default::default()
        });
        let result = detector.search(&edges);
        assert_eq!(result.outcome, SearchOutcome::Converged);
        assert_eq!(result.attempts.len(), 1);
        let c = result.circles[0];
        assert!((c.x - 40).abs() <= 1 && (c.y - 40).abs() <= 1, "{c:?}");
        assert!(c.r.abs_diff(15) <= 1, "{c:?}");
    }

    #[test]
    fn empty_edge_set_stops_after_one_attempt() {
        let detector = CircleDetector::new(DetectorParams::default());
        let result = detector.search(&EdgeSet::new(10, 10));
        assert_eq!(result.outcome, SearchOutcome::NoEdges);
        assert_eq!(result.attempts.len(), 1);
        assert!(result.circles.is_empty());
    }

    #[test]
    fn unreachable_count_reports_non_convergence() {
        let edges = ring_edges(80, 80, 40, 40, 15);
        let detector = CircleDetector::new(DetectorParams {
            min_radius: 13,
            max_radius: 17,
            expected_circles: 3,
            max_attempts: 4,
            ..Default::default()
        });
        let result = detector.search(&edges);
        assert_eq!(result.outcome, SearchOutcome::NonConverged);
        let adjustments: Vec<Adjustment> = result.attempts.iter().map(|a| a.adjustment).collect();
        assert_eq!(adjustments[0], Adjustment::Initial);
        assert!(adjustments[1..].iter().all(|&a| a == Adjustment::Widen));
        let windows: Vec<RadiusWindow> = result.attempts.iter().map(|a| a.window).collect();
        assert_eq!(
            windows,
            vec![
                RadiusWindow::new(13, 17),
                RadiusWindow::new(12, 18),
                RadiusWindow::new(11, 19),
                RadiusWindow::new(10, 20),
            ]
        );
    }

    #[test]
    fn oversized_radius_is_rejected_before_voting() {
        let detector = CircleDetector::new(DetectorParams {
            min_radius: 10,
            max_radius: 100_000_000,
            ..Default::default()
        });
        let buf = vec![255u8; 3 * 40 * 30];
        let err = detector
            .process_with_diagnostics(&ImageRgb8::packed(40, 30, &buf))
            .unwrap_err();
        assert!(matches!(err, DetectError::InvalidConfig { .. }), "{err}");
    }

    #[test]
    fn widened_windows_stay_within_the_diagonal() {
        // 30x30 edge grid: diagonal 42.4 -> limit 43
        let edges = ring_edges(30, 30, 15, 15, 10);
        let detector = CircleDetector::new(DetectorParams {
            min_radius: 38,
            max_radius: 40,
            expected_circles: 1,
            max_attempts: 6,
            ..Default::default()
        });
        let result = detector.search(&edges);
        assert!(result.attempts.iter().all(|a| a.window.max <= 43));
        assert_eq!(result.attempts.last().map(|a| a.window.max), Some(43));
    }

    #[test]
    fn edge_stage_output_is_handed_back() {
        let (w, h) = (16usize, 16usize);
        let mut buf = vec![255u8; 3 * w * h];
        for y in 4..12 {
            for x in 4..12 {
                buf[3 * (y * w + x)..3 * (y * w + x) + 3].fill(0);
            }
        }
        let detector = CircleDetector::new(DetectorParams {
            min_radius: 3,
            max_radius: 5,
            expected_circles: 1,
            max_attempts: 1,
            ..Default::default()
        });
        let (report, edges) = detector
            .process_with_edges(&ImageRgb8::packed(w, h, &buf))
            .unwrap();
        assert_eq!(report.trace.edges.linked, edges.edges.len());
        assert!(!edges.edges.is_empty());
        assert_eq!(edges.grad.width(), w);
    }
}
