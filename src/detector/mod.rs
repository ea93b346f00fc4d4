//! Circle detector orchestrating edge extraction and an adaptive Hough search.
//!
//! Overview
//! - Converts the RGB input to intensity, blurs it with a 5×5 binomial kernel,
//!   and computes central-difference gradients.
//! - Thins the gradient with direction-aligned non-maximum suppression and
//!   links edges by hysteresis. The resulting edge set is computed once.
//! - Votes every edge pixel into a sparse `(a, b, r)` accumulator for the
//!   current radius window and greedily extracts non-overlapping circles.
//! - Widens or narrows the window around the caller's initial bounds until the
//!   expected number of circles is found or `max_attempts` is reached.
//!
//! Modules
//! - [`params`] – configuration consumed by the detector and the CLI.
//! - `pipeline` – the main [`CircleDetector`] implementation.
//! - [`search`] – the radius-window state machine.

pub mod params;
mod pipeline;
pub mod search;

pub use params::DetectorParams;
pub use pipeline::{CircleDetector, SearchResult};
pub use search::{Adjustment, RadiusSearch, SearchStep};
