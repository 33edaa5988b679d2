//! Report configuration types
//!
//! This module defines the render settings used by the report generator.
//! Figure size is expressed in inches and converted to pixels through the DPI,
//! so font sizes given in points scale with the output resolution.

use crate::types::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default output image name
pub const DEFAULT_OUTPUT: &str = "training_metrics.png";

/// Default figure super-title
pub const DEFAULT_TITLE: &str = "Breakout RL Training Metrics";

/// Largest accepted image side in pixels
pub const MAX_SIDE_PX: u32 = 32_768;

/// Largest accepted image area in pixels (the RGB buffer is 3 bytes per pixel)
pub const MAX_PIXELS: u64 = 100_000_000;

/// Configuration for the report generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output image path (format chosen from the extension)
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Figure super-title
    #[serde(default = "default_title")]
    pub title: String,

    /// Figure width in inches (default: 14.0)
    #[serde(default = "default_width_in")]
    pub width_in: f64,

    /// Figure height in inches (default: 10.0)
    #[serde(default = "default_height_in")]
    pub height_in: f64,

    /// Output resolution in dots per inch (default: 150)
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Whether the caller should try to display the image after saving
    #[serde(default = "default_true")]
    pub show: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_width_in() -> f64 {
    14.0
}

fn default_height_in() -> f64 {
    10.0
}

fn default_dpi() -> u32 {
    150
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            title: default_title(),
            width_in: default_width_in(),
            height_in: default_height_in(),
            dpi: default_dpi(),
            show: default_true(),
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the output image path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Builder method: set the figure super-title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder method: set the output resolution
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Builder method: set the figure size in inches
    pub fn with_figure_size(mut self, width_in: f64, height_in: f64) -> Self {
        self.width_in = width_in;
        self.height_in = height_in;
        self
    }

    /// Builder method: enable or disable the interactive display attempt
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Check that the configuration can produce an image
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(ReportError::InvalidConfig("dpi must be positive".to_string()));
        }
        for (name, value) in [("width_in", self.width_in), ("height_in", self.height_in)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ReportError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        let dpi = self.dpi as f64;
        let (width_px, height_px) = (self.width_in * dpi, self.height_in * dpi);
        if width_px.round() > MAX_SIDE_PX as f64 || height_px.round() > MAX_SIDE_PX as f64 {
            return Err(ReportError::InvalidConfig(format!(
                "figure of {}x{} in at {} dpi exceeds {} px per side",
                self.width_in, self.height_in, self.dpi, MAX_SIDE_PX
            )));
        }
        let (width, height) = self.pixel_size();
        if width == 0 || height == 0 {
            return Err(ReportError::InvalidConfig(format!(
                "figure of {}x{} in at {} dpi has no pixels",
                self.width_in, self.height_in, self.dpi
            )));
        }
        if width as u64 * height as u64 > MAX_PIXELS {
            return Err(ReportError::InvalidConfig(format!(
                "figure of {}x{} px exceeds {} pixels",
                width, height, MAX_PIXELS
            )));
        }
        Ok(())
    }

    /// Image size in pixels (inches x dpi, rounded)
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }

    /// Pixels per typographic point
    pub fn font_scale(&self) -> f64 {
        self.dpi as f64 / 72.0
    }

    /// Convert a size in points to pixels at this resolution
    pub fn points(&self, pt: f64) -> u32 {
        (pt * self.font_scale()).round().max(1.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::new();
        assert_eq!(config.output, PathBuf::from("training_metrics.png"));
        assert_eq!(config.title, "Breakout RL Training Metrics");
        assert_eq!(config.dpi, 150);
        assert!(config.show);
        assert_eq!(config.pixel_size(), (2100, 1500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ReportConfig::new()
            .with_output("out/metrics.png")
            .with_title("CartPole")
            .with_dpi(72)
            .with_figure_size(4.0, 3.0)
            .with_show(false);

        assert_eq!(config.output, PathBuf::from("out/metrics.png"));
        assert_eq!(config.title, "CartPole");
        assert_eq!(config.pixel_size(), (288, 216));
        assert_eq!(config.points(10.0), 10);
        assert!(!config.show);
    }

    #[test]
    fn test_validation() {
        assert!(ReportConfig::new().with_dpi(0).validate().is_err());
        assert!(ReportConfig::new().with_figure_size(0.0, 10.0).validate().is_err());
        assert!(ReportConfig::new().with_figure_size(14.0, -1.0).validate().is_err());
        assert!(ReportConfig::new()
            .with_figure_size(f64::NAN, 10.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_oversized_figure_rejected() {
        let huge_dpi = ReportConfig::new().with_dpi(1_000_000);
        assert!(matches!(huge_dpi.validate(), Err(ReportError::InvalidConfig(_))));

        let huge_inches = ReportConfig::new().with_figure_size(1.0e12, 10.0);
        assert!(matches!(huge_inches.validate(), Err(ReportError::InvalidConfig(_))));

        // Each side fits but the area does not: 30000 x 30000 px
        let huge_area = ReportConfig::new().with_dpi(100).with_figure_size(300.0, 300.0);
        assert!(matches!(huge_area.validate(), Err(ReportError::InvalidConfig(_))));

        let largest_side = ReportConfig::new().with_dpi(100).with_figure_size(327.68, 10.0);
        assert!(largest_side.validate().is_ok());
    }

    #[test]
    fn test_points_scale_with_dpi() {
        let config = ReportConfig::new();
        // 150 / 72 pixels per point
        assert_eq!(config.points(16.0), 33);
        assert_eq!(config.points(0.1), 1);
    }
}
