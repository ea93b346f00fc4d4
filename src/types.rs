use serde::{Deserialize, Serialize};

/// A detected circle in pixel coordinates.
///
/// `votes` is the raw accumulator count of the winning `(x, y, r)` triple and
/// `score` the same count normalized by the number of angular steps.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub r: u32,
    #[serde(default)]
    pub votes: u32,
    #[serde(default)]
    pub score: f32,
}

impl Circle {
    /// Circle without vote information (e.g. built by hand or in tests).
    pub fn new(x: i32, y: i32, r: u32) -> Self {
        Self {
            x,
            y,
            r,
            votes: 0,
            score: 0.0,
        }
    }

    /// True when `(px, py)` lies strictly outside this circle's radius.
    ///
    /// This is the exclusion test used by the selector: only the candidate's
    /// centre is checked, not whether the two boundaries intersect.
    #[inline]
    pub fn excludes_center(&self, px: i32, py: i32) -> bool {
        let dx = i64::from(px) - i64::from(self.x);
        let dy = i64::from(py) - i64::from(self.y);
        let r = i64::from(self.r);
        dx * dx + dy * dy > r * r
    }
}

/// Inclusive radius search window in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusWindow {
    pub min: u32,
    pub max: u32,
}

impl RadiusWindow {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Number of candidate radii in the window (0 when inverted).
    pub fn len(&self) -> usize {
        if self.max < self.min {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, r: u32) -> bool {
        (self.min..=self.max).contains(&r)
    }

    pub fn radii(&self) -> std::ops::RangeInclusive<u32> {
        self.min..=self.max
    }
}

/// Integer pixel coordinate of an accepted edge pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EdgePoint {
    pub x: u32,
    pub y: u32,
}
