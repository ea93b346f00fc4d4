//! Non‑maximum suppression on gradient magnitude with direction alignment.
//!
//! Each interior pixel with nonzero magnitude has its direction folded into
//! [0, π] and quantized by rounding `angle / (π/4)` into one of five bins,
//! where bins 0 and 4 both mean a horizontal gradient. The pixel is compared
//! against its two neighbours along that direction and zeroed when either
//! neighbour is strictly greater; ties survive.
//!
//! Comparisons read the magnitudes as they were before this pass, so the
//! outcome does not depend on scan order and rows are processed in parallel.
//! The outermost 1‑pixel frame is never touched.
use crate::edges::grad::GradientMap;
use crate::image::{ImageView, ImageViewMut};
use rayon::prelude::*;
use std::f32::consts::{FRAC_PI_4, PI};

/// Quantized gradient orientation selecting the comparison neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionBin {
    /// Horizontal gradient (vertical edge): compare (x−1, y) and (x+1, y).
    Horizontal,
    /// Gradient along +x/+y: compare (x−1, y−1) and (x+1, y+1).
    Diagonal,
    /// Vertical gradient (horizontal edge): compare (x, y−1) and (x, y+1).
    Vertical,
    /// Gradient along +x/−y: compare (x+1, y−1) and (x−1, y+1).
    AntiDiagonal,
}

impl DirectionBin {
    /// Neighbour offsets `(dx, dy)` of the pair compared along this bin.
    #[inline]
    pub fn neighbours(self) -> [(isize, isize); 2] {
        match self {
            Self::Horizontal => [(-1, 0), (1, 0)],
            Self::Diagonal => [(-1, -1), (1, 1)],
            Self::Vertical => [(0, -1), (0, 1)],
            Self::AntiDiagonal => [(1, -1), (-1, 1)],
        }
    }
}

/// Quantize a gradient direction in [−π, π] into a suppression bin.
#[inline]
pub fn direction_bin(angle: f32) -> DirectionBin {
    let folded = if angle < 0.0 { angle + PI } else { angle };
    match (folded / FRAC_PI_4).round() as i32 {
        1 => DirectionBin::Diagonal,
        2 => DirectionBin::Vertical,
        3 => DirectionBin::AntiDiagonal,
        _ => DirectionBin::Horizontal,
    }
}

/// Zero every magnitude that is not a local maximum along its gradient.
///
/// Returns the number of pixels that were suppressed by this call.
pub fn suppress_non_maxima(grad: &mut GradientMap) -> usize {
    let w = grad.width();
    let h = grad.height();
    if w < 3 || h < 3 {
        return 0;
    }

    let suppressed: Vec<Vec<usize>> = {
        let mag = &grad.mag;
        let dir = &grad.dir;
        (1..h - 1)
            .into_par_iter()
            .map(|y| {
                let rows = [mag.row(y - 1), mag.row(y), mag.row(y + 1)];
                let dir_row = dir.row(y);
                let mut hits = Vec::new();
                for x in 1..w - 1 {
                    let m = rows[1][x];
                    if m == 0.0 {
                        continue;
                    }
                    let beaten = direction_bin(dir_row[x])
                        .neighbours()
                        .iter()
                        .any(|&(dx, dy)| {
                            let nx = (x as isize + dx) as usize;
                            rows[(1 + dy) as usize][nx] > m
                        });
                    if beaten {
                        hits.push(x);
                    }
                }
                hits
            })
            .collect()
    };

    let mut count = 0;
    for (offset, xs) in suppressed.iter().enumerate() {
        let row = grad.mag.row_mut(offset + 1);
        for &x in xs {
            row[x] = 0.0;
        }
        count += xs.len();
    }
    count
}
