//! Fixed 5×5 Gaussian smoothing with replicated borders.
//!
//! The kernel is the outer product of the binomial taps `[1, 4, 6, 4, 1] / 16`
//! (weights sum to 1). Neighbourhood coordinates are clamped to the image
//! extents, so border pixels are smoothed with duplicated edge values rather
//! than darkened by implicit zeros. Output samples are truncated to integers.
use crate::image::{ImageF32, ImageView};

type Kernel5 = [[f32; 5]; 5];

/// Outer product of the binomial taps, written out in 1/256 units.
const GAUSSIAN_KERNEL_5X5: Kernel5 = [
    [1.0 / 256.0, 4.0 / 256.0, 6.0 / 256.0, 4.0 / 256.0, 1.0 / 256.0],
    [4.0 / 256.0, 16.0 / 256.0, 24.0 / 256.0, 16.0 / 256.0, 4.0 / 256.0],
    [6.0 / 256.0, 24.0 / 256.0, 36.0 / 256.0, 24.0 / 256.0, 6.0 / 256.0],
    [4.0 / 256.0, 16.0 / 256.0, 24.0 / 256.0, 16.0 / 256.0, 4.0 / 256.0],
    [1.0 / 256.0, 4.0 / 256.0, 6.0 / 256.0, 4.0 / 256.0, 1.0 / 256.0],
];

#[inline]
fn clamped(i: usize, offset: usize, len: usize) -> usize {
    // offset is in 0..5, centred on 2
    (i + offset).saturating_sub(2).min(len - 1)
}

/// Blur `l` with the 5×5 kernel. Empty images are returned unchanged.
pub fn gaussian_blur_5x5(l: &ImageF32) -> ImageF32 {
    let (w, h) = (l.w, l.h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    out.par_fill_rows(|y, dst| {
        let rows: [&[f32]; 5] = std::array::from_fn(|ky| l.row(clamped(y, ky, h)));
        for (x, px) in dst.iter_mut().enumerate() {
            let cols: [usize; 5] = std::array::from_fn(|kx| clamped(x, kx, w));
            let mut acc = 0.0f32;
            for (row, weights) in rows.iter().zip(GAUSSIAN_KERNEL_5X5.iter()) {
                for (&xx, &wgt) in cols.iter().zip(weights.iter()) {
                    acc += row[xx] * wgt;
                }
            }
            *px = acc.trunc();
        }
    });
    out
}
