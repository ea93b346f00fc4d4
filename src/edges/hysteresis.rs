//! Two-threshold edge linking (hysteresis) over a suppressed magnitude map.
//!
//! Pixels with magnitude `> high` seed the accepted set. The set then grows
//! breadth-first: every pixel in the latest frontier admits its 8-connected
//! neighbours whose magnitude is `> low` and which are not yet accepted. The
//! expansion uses an explicit worklist, never recursion.
use crate::image::{ImageF32, ImageView};
use crate::types::EdgePoint;
use serde::{Deserialize, Serialize};

const NEIGHBOURS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Hysteresis bounds on the 0..255 gradient-magnitude scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HysteresisThresholds {
    pub low: f32,
    pub high: f32,
}

impl Default for HysteresisThresholds {
    fn default() -> Self {
        Self {
            low: 20.0,
            high: 25.0,
        }
    }
}

/// Unique set of accepted edge pixels.
///
/// Points are kept in insertion order (seeds first, then each frontier) next
/// to a membership mask for O(1) lookups.
#[derive(Clone, Debug, Default)]
pub struct EdgeSet {
    width: usize,
    height: usize,
    points: Vec<EdgePoint>,
    mask: Vec<bool>,
}

impl EdgeSet {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            points: Vec::new(),
            mask: vec![false; width * height],
        }
    }

    /// Insert `(x, y)`; returns false when it was already present.
    pub fn insert(&mut self, x: usize, y: usize) -> bool {
        let idx = y * self.width + x;
        if self.mask[idx] {
            return false;
        }
        self.mask[idx] = true;
        self.points.push(EdgePoint {
            x: x as u32,
            y: y as u32,
        });
        true
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.mask[y * self.width + x]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EdgePoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[EdgePoint] {
        &self.points
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rasterize the set as a 0/255 mask for debugging.
    pub fn to_mask_image(&self) -> ImageF32 {
        let mut out = ImageF32::new(self.width, self.height);
        for p in &self.points {
            out.set(p.x as usize, p.y as usize, 255.0);
        }
        out
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a EdgePoint;
    type IntoIter = std::slice::Iter<'a, EdgePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Pixels whose magnitude strictly exceeds `high`.
pub fn strong_seeds(mag: &ImageF32, high: f32) -> EdgeSet {
    let mut seeds = EdgeSet::new(mag.w, mag.h);
    for (y, row) in mag.rows().enumerate() {
        for (x, &m) in row.iter().enumerate() {
            if m > high {
                seeds.insert(x, y);
            }
        }
    }
    seeds
}

/// Grow the strong seeds through 8-connected pixels above `low`.
pub fn link_edges(mag: &ImageF32, thresholds: HysteresisThresholds) -> EdgeSet {
    let mut keep = strong_seeds(mag, thresholds.high);
    let (w, h) = (mag.w, mag.h);

    let mut frontier: Vec<EdgePoint> = keep.as_slice().to_vec();
    let mut next = Vec::new();
    while !frontier.is_empty() {
        for p in &frontier {
            for &(dx, dy) in &NEIGHBOURS_8 {
                let nx = p.x as isize + dx;
                let ny = p.y as isize + dy;
                if nx < 0 || ny < 0 || nx as usize >= w || ny as usize >= h {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if mag.get(nx, ny) > thresholds.low && keep.insert(nx, ny) {
                    next.push(EdgePoint {
                        x: nx as u32,
                        y: ny as u32,
                    });
                }
            }
        }
        std::mem::swap(&mut frontier, &mut next);
        next.clear();
    }
    keep
}
