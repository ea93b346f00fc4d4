//! Reordering of detected circles into a fixed marker layout.
//!
//! The detector returns circles by vote strength. Measurement reports refer to
//! markers by position on the rig, so the seven-marker layouts sort circles by
//! row (largest `y` first) and resolve the ambiguous pairs with a corner rule.
use crate::error::DetectError;
use crate::types::Circle;
use serde::{Deserialize, Serialize};

const SEVEN: usize = 7;

/// Output order applied to detected circles before measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerLayout {
    /// Keep the detector's order (strongest first).
    #[default]
    Detection,
    /// Seven markers seen in a perspective photo.
    SevenMarkerPhoto,
    /// Seven markers in a rectified (fronto-parallel) image.
    SevenMarkerRectified,
}

impl MarkerLayout {
    /// Number of circles the layout requires, if any.
    pub fn required_count(self) -> Option<usize> {
        match self {
            Self::Detection => None,
            Self::SevenMarkerPhoto | Self::SevenMarkerRectified => Some(SEVEN),
        }
    }

    /// Reorder `circles` according to the layout.
    pub fn arrange(self, circles: &[Circle]) -> Result<Vec<Circle>, DetectError> {
        if let Some(n) = self.required_count() {
            if circles.len() != n {
                return Err(DetectError::invalid_input(format!(
                    "{self:?} layout needs exactly {n} circles, got {}",
                    circles.len()
                )));
            }
        }
        let mut s = circles.to_vec();
        // stable: equal rows keep detection order
        s.sort_by(|p, q| q.y.cmp(&p.y));
        let arranged = match self {
            Self::Detection => circles.to_vec(),
            Self::SevenMarkerPhoto => {
                let (m2, m1) = pick(s[1], s[2]);
                let (m2, m5) = pick(s[5], m2);
                vec![s[3], m1, m2, s[6], s[4], m5, s[0]]
            }
            Self::SevenMarkerRectified => {
                let (m2, m1) = pick(s[1], s[2]);
                let (m2, m5) = pick(s[4], m2);
                vec![m5, m1, m2, s[5], s[6], s[3], s[0]]
            }
        };
        Ok(arranged)
    }
}

/// `p` goes first when it lies right of and above (or level with) `q`.
fn pick(p: Circle, q: Circle) -> (Circle, Circle) {
    if p.x >= q.x && p.y <= q.y {
        (p, q)
    } else {
        (q, p)
    }
}
