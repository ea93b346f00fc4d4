//! RGB → single-channel intensity reduction.
//!
//! Intensity is the unweighted channel mean `(R + G + B) / 3`, kept as a real
//! value (no rounding) on the 0..255 scale.
use crate::error::DetectError;
use crate::image::{ImageF32, ImageRgb8};

/// Collapse an RGB view to intensity. Rejects zero-area or short buffers.
pub fn to_intensity(image: &ImageRgb8<'_>) -> Result<ImageF32, DetectError> {
    image.validate()?;
    let mut out = ImageF32::new(image.w, image.h);
    out.par_fill_rows(|y, dst| {
        let src = image.row_bytes(y);
        for (px, rgb) in dst.iter_mut().zip(src.chunks_exact(3)) {
            let sum = u16::from(rgb[0]) + u16::from(rgb[1]) + u16::from(rgb[2]);
            *px = f32::from(sum) / 3.0;
        }
    });
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_channels_without_rounding() {
        let buf = [255u8, 0, 0, 10, 20, 31];
        let img = ImageRgb8::packed(2, 1, &buf);
        let gray = to_intensity(&img).expect("valid image");
        assert_eq!(gray.get(0, 0), 85.0);
        assert!((gray.get(1, 0) - 61.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn rejects_empty_image() {
        let img = ImageRgb8::packed(0, 0, &[]);
        assert!(matches!(
            to_intensity(&img),
            Err(DetectError::InvalidInput { .. })
        ));
    }
}
