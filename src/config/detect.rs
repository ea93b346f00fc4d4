use crate::detector::DetectorParams;
use crate::layout::MarkerLayout;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Photos wider than this are halved before detection.
pub const DEFAULT_MAX_INPUT_WIDTH: usize = 1500;

#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    pub input: PathBuf,
    /// `null` disables downscaling.
    #[serde(default = "default_max_input_width")]
    pub max_input_width: Option<usize>,
    #[serde(default)]
    pub detector: DetectorParams,
    #[serde(default)]
    pub measurement: MeasurementConfig,
    #[serde(default)]
    pub output: DetectOutputConfig,
}

fn default_max_input_width() -> Option<usize> {
    Some(DEFAULT_MAX_INPUT_WIDTH)
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MeasurementConfig {
    /// Physical marker diameter; distances stay in pixels when unset.
    pub object_size_mm: Option<f64>,
    pub layout: MarkerLayout,
    /// Added to circle indices in the text report.
    pub index_base: usize,
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            object_size_mm: None,
            layout: MarkerLayout::Detection,
            index_base: 1,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DetectOutputConfig {
    pub annotated_image: Option<PathBuf>,
    pub report_txt: Option<PathBuf>,
    pub result_json: Option<PathBuf>,
    pub debug_dir: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<DetectToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}
