use crate::types::Circle;
use std::fmt;

/// Errors surfaced by the detection pipeline and its post-processing steps.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectError {
    /// The input data cannot be processed (zero-area image, short buffer, ...).
    InvalidInput { reason: String },
    /// The detector configuration was rejected before running.
    InvalidConfig { reason: String },
    /// The radius search hit its attempt ceiling without reaching the
    /// expected circle count. `last_circles` holds the final attempt's result.
    NonConvergence {
        expected: usize,
        attempts: usize,
        last_circles: Vec<Circle>,
    },
}

impl DetectError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::InvalidConfig { reason } => write!(f, "invalid configuration: {reason}"),
            Self::NonConvergence {
                expected,
                attempts,
                last_circles,
            } => write!(
                f,
                "radius search did not converge: expected {expected} circles, \
                 last attempt found {} after {attempts} attempts",
                last_circles.len()
            ),
        }
    }
}

impl std::error::Error for DetectError {}
