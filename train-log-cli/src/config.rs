//! Configuration loading and parsing
//!
//! The config file is optional; every section and key falls back to the
//! built-in defaults, and command-line flags override whatever it sets.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use train_log_report::ReportConfig;

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub dpi: Option<u32>,
    pub title: Option<String>,
    pub width_in: Option<f64>,
    pub height_in: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_show")]
    pub show: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show: default_show(),
        }
    }
}

fn default_show() -> bool {
    true
}

impl AppConfig {
    /// Input log path, falling back to `train-log.csv`
    pub fn input_path(&self) -> PathBuf {
        self.input
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(train_log_report::DEFAULT_INPUT))
    }

    /// Render settings described by this file
    pub fn report_config(&self) -> ReportConfig {
        let mut config = ReportConfig::new().with_show(self.display.show);
        if let Some(path) = &self.output.path {
            config = config.with_output(path.clone());
        }
        if let Some(dpi) = self.output.dpi {
            config = config.with_dpi(dpi);
        }
        if let Some(title) = &self.output.title {
            config = config.with_title(title.clone());
        }
        let width = self.output.width_in.unwrap_or(config.width_in);
        let height = self.output.height_in.unwrap_or(config.height_in);
        config.with_figure_size(width, height)
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
