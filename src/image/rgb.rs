use crate::error::DetectError;

/// Borrowed 3-channel (RGB, 8 bits per channel) image view.
///
/// `stride` is the number of bytes between consecutive rows and must be at
/// least `3 * w`. Pixels are stored interleaved as `R, G, B`.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgb8<'a> {
    /// Tightly packed view (`stride == 3 * w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: 3 * w,
            data,
        }
    }

    /// Reject zero-area images and buffers that cannot hold `h` rows.
    pub fn validate(&self) -> Result<(), DetectError> {
        if self.w == 0 || self.h == 0 {
            return Err(DetectError::invalid_input(format!(
                "image has zero area ({}x{})",
                self.w, self.h
            )));
        }
        if self.stride < 3 * self.w {
            return Err(DetectError::invalid_input(format!(
                "stride {} is smaller than 3 * width ({})",
                self.stride,
                3 * self.w
            )));
        }
        let needed = (self.h - 1) * self.stride + 3 * self.w;
        if self.data.len() < needed {
            return Err(DetectError::invalid_input(format!(
                "pixel buffer holds {} bytes, {needed} required",
                self.data.len()
            )));
        }
        Ok(())
    }

    /// Interleaved bytes of row `y` (exactly `3 * w` long).
    #[inline]
    pub fn row_bytes(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + 3 * self.w]
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + 3 * x;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
