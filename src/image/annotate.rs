//! Overlay rendering for detection results.
use crate::measure::PairDistance;
use crate::types::Circle;
use image::RgbImage;
use imageproc::drawing::{draw_cross_mut, draw_hollow_circle_mut, draw_line_segment_mut};

pub mod colors {
    use image::Rgb;

    pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]); // circle outline
    pub const RED: Rgb<u8> = Rgb([255, 50, 50]); // centre
    pub const BLUE: Rgb<u8> = Rgb([50, 100, 255]); // measured pair
}

/// Draw circle outlines, centre crosses and one segment per measured pair.
///
/// `pairs` index into `circles`; pairs pointing outside the list are skipped.
pub fn annotate_circles(image: &mut RgbImage, circles: &[Circle], pairs: &[PairDistance]) {
    for p in pairs {
        let (Some(a), Some(b)) = (circles.get(p.from), circles.get(p.to)) else {
            continue;
        };
        draw_line_segment_mut(
            image,
            (a.x as f32, a.y as f32),
            (b.x as f32, b.y as f32),
            colors::BLUE,
        );
    }
    for c in circles {
        let radius = i32::try_from(c.r).unwrap_or(i32::MAX);
        draw_hollow_circle_mut(image, (c.x, c.y), radius, colors::GREEN);
        // second ring keeps the outline visible on photos
        draw_hollow_circle_mut(image, (c.x, c.y), radius.saturating_add(1), colors::GREEN);
        draw_cross_mut(image, colors::RED, c.x, c.y);
    }
}
