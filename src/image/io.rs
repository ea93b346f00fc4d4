//! I/O helpers for RGB images, debug rasters, text reports and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG into an owned RGB8 buffer, halving
//!   oversized photos.
//! - `save_rgb_image`: write an `image::RgbImage` (e.g. an annotated copy).
//! - `save_grayscale_f32`: write an `ImageF32` on the 0..255 scale to a PNG.
//! - `write_text_file` / `write_json_file`: reports, creating parent directories.
use super::{ImageF32, ImageRgb8, ImageView};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned RGB8 buffer with a borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImageU8 {
    /// Construct an owned buffer from tightly packed `R, G, B` bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgb8` view
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8::packed(self.width, self.height, &self.data)
    }

    /// Copy into an `image::RgbImage` for drawing and saving.
    pub fn to_rgb_image(&self) -> Result<RgbImage, String> {
        RgbImage::from_raw(self.width as u32, self.height as u32, self.data.clone())
            .ok_or_else(|| "Failed to create RGB image buffer".to_string())
    }
}

/// Load an image from disk as RGB8.
///
/// When `max_width` is set and the image is wider, both dimensions are halved
/// once before returning.
pub fn load_rgb_image(path: &Path, max_width: Option<usize>) -> Result<RgbImageU8, String> {
    let mut img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    if let Some(limit) = max_width {
        if img.width() as usize > limit {
            let (nw, nh) = ((img.width() / 2).max(1), (img.height() / 2).max(1));
            log::debug!(
                "load_rgb_image halving {}x{} -> {nw}x{nh}",
                img.width(),
                img.height()
            );
            img = imageops::resize(&img, nw, nh, FilterType::Triangle);
        }
    }
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbImageU8::new(width, height, img.into_raw()))
}

/// Save an RGB image; the format follows the file extension.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a float image to a grayscale PNG, clamping values to [0, 255].
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = px.clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Write a plain-text file, creating parent directories.
pub fn write_text_file(path: &Path, contents: &str) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
