//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Used for every intermediate grid of the edge pipeline: intensity, blurred
//! intensity, gradient magnitude and gradient direction. Values are kept on
//! the 0..255 intensity scale; nothing is normalized to [0, 1].
use rayon::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Construct a buffer filled with a constant value.
    pub fn filled(w: usize, h: usize, value: f32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Fill every row in parallel; `f(y, row)` writes one output row.
    pub(crate) fn par_fill_rows<F>(&mut self, f: F)
    where
        F: Fn(usize, &mut [f32]) + Sync + Send,
    {
        let w = self.w;
        if w == 0 {
            return;
        }
        self.data
            .par_chunks_mut(self.stride)
            .enumerate()
            .for_each(|(y, row)| f(y, &mut row[..w]));
    }

    /// Number of strictly positive samples.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v > 0.0).count()
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    #[test]
    fn par_fill_rows_visits_every_row_once() {
        let mut img = ImageF32::new(4, 3);
        img.par_fill_rows(|y, row| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = (y * 10 + x) as f32;
            }
        });
        assert_eq!(img.get(3, 2), 23.0);
        let sums: Vec<f32> = img.rows().map(|r| r.iter().sum()).collect();
        assert_eq!(sums, vec![6.0, 46.0, 86.0]);
        assert_eq!(img.count_nonzero(), 11);
    }
}
