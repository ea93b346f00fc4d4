//! Hough-transform circle detection on a precomputed edge set.
//!
//! - `accumulator`: sparse `(a, b, r) → votes` map filled by every edge pixel.
//! - `select`: greedy top-down extraction of non-overlapping circles.
//!
//! Cost is O(|edges| × radii × steps) per attempt, which dominates the whole
//! pipeline; keep the radius window as narrow as the search allows.

pub mod accumulator;
pub mod select;

pub use accumulator::{ring_offsets, Accumulator, CircleCandidate, CircleKey, RingOffset};
pub use select::select_circles;

use crate::edges::EdgeSet;
use crate::types::{Circle, RadiusWindow};

/// Result of one voting + selection pass.
#[derive(Clone, Debug)]
pub struct HoughPass {
    pub circles: Vec<Circle>,
    /// Number of populated accumulator keys.
    pub accumulator_keys: usize,
}

/// Vote over `window` and extract circles whose normalized vote ratio reaches
/// `vote_threshold`.
pub fn hough_circles(
    edges: &EdgeSet,
    window: RadiusWindow,
    steps: usize,
    vote_threshold: f32,
) -> HoughPass {
    let acc = Accumulator::vote(edges, window, steps);
    let circles = select_circles(&acc, steps, vote_threshold);
    HoughPass {
        circles,
        accumulator_keys: acc.len(),
    }
}
