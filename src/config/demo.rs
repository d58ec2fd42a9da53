use crate::types::LineSegment;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    /// Inline input segments. Takes precedence over `input` when non-empty.
    #[serde(default)]
    pub segments: Vec<LineSegment>,
    /// Path to a JSON array of segments, used when `segments` is empty.
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    pub output: OutputConfig,
}

impl DemoConfig {
    /// Inline segments, or the contents of the `input` file.
    pub fn resolve_segments(&self) -> Result<Vec<LineSegment>, String> {
        if !self.segments.is_empty() {
            return Ok(self.segments.clone());
        }
        let path = self
            .input
            .as_deref()
            .ok_or("Config needs either inline \"segments\" or an \"input\" path")?;
        let data = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read segments {}: {e}", path.display()))?;
        serde_json::from_str(&data)
            .map_err(|e| format!("Failed to parse segments {}: {e}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub process_noise: f64,
    pub measurement_noise: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            process_noise: 0.01,
            measurement_noise: 10.0,
        }
    }
}

/// Range over which the fitted curve is sampled for rendering.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            start: -2.0,
            end: 2.0,
            step: 0.01,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Raster output; `.ppm` is written natively, other extensions go through
    /// the `image` crate.
    pub image: PathBuf,
    /// Optional text file receiving the fitted equation.
    #[serde(default)]
    pub equation: Option<PathBuf>,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_true")]
    pub draw_points: bool,
}

fn default_width() -> usize {
    1000
}

fn default_height() -> usize {
    800
}

fn default_true() -> bool {
    true
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
