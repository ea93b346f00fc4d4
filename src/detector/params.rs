//! Parameters configuring the circle detector.
//!
//! Defaults follow the reference marker rig: 7 markers of radius 25–35 px,
//! hysteresis bounds 20/25 on the 0..255 gradient scale, 100 angular steps and
//! a 0.4 vote ratio.

use crate::edges::HysteresisThresholds;
use crate::error::DetectError;
use crate::types::RadiusWindow;
use serde::{Deserialize, Serialize};

/// Upper bound on boundary samples per radius (a tenth of a degree).
pub const MAX_ANGULAR_STEPS: usize = 3600;

/// Detector-wide parameters (the caller-facing configuration surface).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Smallest radius of the initial search window (pixels, >= 1).
    pub min_radius: u32,
    /// Largest radius of the initial search window (pixels).
    pub max_radius: u32,
    /// Circle count the radius search tries to reach.
    pub expected_circles: usize,
    /// Hysteresis low bound: weak pixels must exceed it to be linked.
    pub low_threshold: f32,
    /// Hysteresis high bound: pixels above it seed the edge set.
    pub high_threshold: f32,
    /// Boundary samples per radius in the accumulator.
    pub angular_steps: usize,
    /// Minimum `votes / angular_steps` for a circle to be accepted.
    pub vote_threshold: f32,
    /// Ceiling on detection attempts made by the radius search.
    pub max_attempts: usize,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            min_radius: 25,
            max_radius: 35,
            expected_circles: 7,
            low_threshold: 20.0,
            high_threshold: 25.0,
            angular_steps: 100,
            vote_threshold: 0.4,
            max_attempts: 20,
        }
    }
}

impl DetectorParams {
    pub fn window(&self) -> RadiusWindow {
        RadiusWindow::new(self.min_radius, self.max_radius)
    }

    pub fn thresholds(&self) -> HysteresisThresholds {
        HysteresisThresholds {
            low: self.low_threshold,
            high: self.high_threshold,
        }
    }

    /// Reject malformed configurations before any pixel is touched.
    pub fn validate(&self) -> Result<(), DetectError> {
        if self.min_radius == 0 {
            return Err(DetectError::invalid_config("min_radius must be at least 1"));
        }
        if self.max_radius < self.min_radius {
            return Err(DetectError::invalid_config(format!(
                "max_radius ({}) is smaller than min_radius ({})",
                self.max_radius, self.min_radius
            )));
        }
        if self.angular_steps == 0 || self.angular_steps > MAX_ANGULAR_STEPS {
            return Err(DetectError::invalid_config(format!(
                "angular_steps ({}) must lie in 1..={MAX_ANGULAR_STEPS}",
                self.angular_steps
            )));
        }
        if !(self.low_threshold.is_finite() && self.high_threshold.is_finite()) {
            return Err(DetectError::invalid_config("thresholds must be finite"));
        }
        if self.low_threshold < 0.0 {
            return Err(DetectError::invalid_config("low_threshold must be non-negative"));
        }
        if self.low_threshold > self.high_threshold {
            return Err(DetectError::invalid_config(format!(
                "low_threshold ({}) exceeds high_threshold ({})",
                self.low_threshold, self.high_threshold
            )));
        }
        if !(self.vote_threshold > 0.0 && self.vote_threshold <= 1.0) {
            return Err(DetectError::invalid_config(format!(
                "vote_threshold ({}) must lie in (0, 1]",
                self.vote_threshold
            )));
        }
        if self.expected_circles == 0 {
            return Err(DetectError::invalid_config("expected_circles must be positive"));
        }
        if self.max_attempts == 0 {
            return Err(DetectError::invalid_config("max_attempts must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(DetectorParams::default().validate().is_ok());
    }

    #[test]
    fn malformed_configurations_are_rejected() {
        let base = DetectorParams::default();
        let cases = [
            DetectorParams {
                max_radius: 10,
                min_radius: 11,
                ..base.clone()
            },
            DetectorParams {
                min_radius: 0,
                ..base.clone()
            },
            DetectorParams {
                angular_steps: 0,
                ..base.clone()
            },
            DetectorParams {
                angular_steps: MAX_ANGULAR_STEPS + 1,
                ..base.clone()
            },
            DetectorParams {
                low_threshold: 30.0,
                ..base.clone()
            },
            DetectorParams {
                low_threshold: -1.0,
                ..base.clone()
            },
            DetectorParams {
                vote_threshold: 0.0,
                ..base.clone()
            },
            DetectorParams {
                vote_threshold: f32::NAN,
                ..base.clone()
            },
            DetectorParams {
                expected_circles: 0,
                ..base.clone()
            },
            DetectorParams {
                max_attempts: 0,
                ..base.clone()
            },
        ];
        for params in cases {
            assert!(
                matches!(params.validate(), Err(DetectError::InvalidConfig { .. })),
                "accepted {params:?}"
            );
        }
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: DetectorParams =
            serde_json::from_str(r#"{ "min_radius": 18, "max_radius": 22, "expected_circles": 2 }"#)
                .expect("valid json");
        assert_eq!(params.window(), RadiusWindow::new(18, 22));
        assert_eq!(params.angular_steps, 100);
        assert_eq!(params.thresholds(), HysteresisThresholds::default());
    }
}
