//! Physical distances between marker centres.
//!
//! The pixel-to-millimetre scale comes from the known marker diameter divided
//! by the mean detected diameter; every centre distance is scaled by it.
use crate::error::DetectError;
use crate::types::Circle;
use nalgebra::Point2;
use serde::Serialize;
use std::fmt::Write as _;

/// Distance between two circles of a list, addressed by list index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairDistance {
    pub from: usize,
    pub to: usize,
    pub distance_mm: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceCalculator {
    object_size_mm: f64,
    mm_per_px: f64,
}

impl DistanceCalculator {
    /// Calculator with a 1:1 scale until radii are supplied.
    pub fn new(object_size_mm: f64) -> Self {
        Self {
            object_size_mm,
            mm_per_px: 1.0,
        }
    }

    /// Derive the scale from the detected radii.
    pub fn with_radii(self, radii: &[u32]) -> Result<Self, DetectError> {
        if radii.is_empty() {
            return Err(DetectError::invalid_input(
                "cannot derive a scale without any circle",
            ));
        }
        if !(self.object_size_mm.is_finite() && self.object_size_mm > 0.0) {
            return Err(DetectError::invalid_config(format!(
                "object size must be positive, got {}",
                self.object_size_mm
            )));
        }
        let sum: f64 = radii.iter().map(|&r| 2.0 * f64::from(r)).sum();
        let average_diameter = sum / radii.len() as f64;
        Ok(Self {
            mm_per_px: self.object_size_mm / average_diameter,
            ..self
        })
    }

    pub fn mm_per_px(&self) -> f64 {
        self.mm_per_px
    }

    /// Scaled Euclidean distance between two circle centres.
    pub fn distance(&self, a: &Circle, b: &Circle) -> f64 {
        nalgebra::distance(&centre(a), &centre(b)) * self.mm_per_px
    }

    /// Distances for every unordered pair `i < j` in list order.
    pub fn pairwise(&self, circles: &[Circle]) -> Vec<PairDistance> {
        let mut out = Vec::with_capacity(circles.len() * circles.len().saturating_sub(1) / 2);
        for (i, a) in circles.iter().enumerate() {
            for (j, b) in circles.iter().enumerate().skip(i + 1) {
                out.push(PairDistance {
                    from: i,
                    to: j,
                    distance_mm: self.distance(a, b),
                });
            }
        }
        out
    }
}

fn centre(c: &Circle) -> Point2<f64> {
    Point2::new(f64::from(c.x), f64::from(c.y))
}

/// Render `"{i} -> {j} = {d:.2}"` lines, indices offset by `index_base`.
pub fn format_report(pairs: &[PairDistance], index_base: usize) -> String {
    let mut out = String::new();
    for p in pairs {
        let _ = writeln!(
            out,
            "{} -> {} = {:.2}",
            p.from + index_base,
            p.to + index_base,
            p.distance_mm
        );
    }
    out.push('\n');
    out
}
