//! Central-difference image gradients with magnitude and direction.
//!
//! - `gx = I(x+1, y) − I(x−1, y)`, `gy = I(x, y+1) − I(x, y−1)`.
//! - `mag = sqrt(gx² + gy²)`, `dir = atan2(gy, gx)` in [−π, π].
//! - The outermost 1-pixel frame gets magnitude 0 and direction 0, so border
//!   pixels can never become edges.
//!
//! Complexity: O(W·H); memory: two float buffers.
use crate::image::{ImageF32, ImageView};

/// Per-pixel gradient magnitude and direction, co-indexed with the source.
///
/// Suppression zeroes entries of `mag` in place; `dir` is never modified
/// after construction.
#[derive(Clone, Debug)]
pub struct GradientMap {
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: ImageF32,
    /// Gradient direction in radians, `atan2(gy, gx)`
    pub dir: ImageF32,
}

impl GradientMap {
    pub fn width(&self) -> usize {
        self.mag.w
    }

    pub fn height(&self) -> usize {
        self.mag.h
    }
}

/// Compute central-difference gradients on a single-channel float image.
pub fn central_gradients(l: &ImageF32) -> GradientMap {
    let (w, h) = (l.w, l.h);
    let mut mag = ImageF32::new(w, h);
    let mut dir = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return GradientMap { mag, dir };
    }

    mag.par_fill_rows(|y, out| {
        if y == 0 || y == h - 1 {
            return;
        }
        let (prev, row, next) = (l.row(y - 1), l.row(y), l.row(y + 1));
        for x in 1..w - 1 {
            let gx = row[x + 1] - row[x - 1];
            let gy = next[x] - prev[x];
            out[x] = (gx * gx + gy * gy).sqrt();
        }
    });
    dir.par_fill_rows(|y, out| {
        if y == 0 || y == h - 1 {
            return;
        }
        let (prev, row, next) = (l.row(y - 1), l.row(y), l.row(y + 1));
        for x in 1..w - 1 {
            out[x] = (next[x] - prev[x]).atan2(row[x + 1] - row[x - 1]);
        }
    });

    GradientMap { mag, dir }
}
