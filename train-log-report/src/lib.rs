//! Training Log Report Library
//!
//! A small, stateless library that turns a reinforcement-learning training log
//! (`train-log.csv`) into a diagnostic image with four charts: reward with its
//! 100-episode rolling average, loss, exploration rate and throughput.
//!
//! # Architecture
//!
//! - [`reader`] loads and validates the CSV into a [`TrainingLog`]
//! - [`report`] renders the log as a 2x2 chart grid and writes the image
//! - [`config`] holds the render settings (output path, size, DPI, title)
//!
//! The library does NOT:
//! - Compute any statistics (the rolling average is read from the log)
//! - Print to the console or exit the process
//! - Display the image
//!
//! Those belong to the application layer (train-log-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use train_log_report::{read_training_log, ReportConfig, ReportGenerator};
//! use std::path::Path;
//!
//! let log = read_training_log(Path::new("train-log.csv")).unwrap();
//!
//! let config = ReportConfig::new()
//!     .with_output("training_metrics.png")
//!     .with_dpi(150);
//!
//! let written = ReportGenerator::new(config).render(&log).unwrap();
//! println!("Saved visualization to {}", written.display());
//! ```

// Public modules
pub mod axis;
pub mod config;
pub mod reader;
pub mod report;
pub mod types;

// Re-export main types for convenience
pub use config::{ReportConfig, DEFAULT_OUTPUT, DEFAULT_TITLE};
pub use reader::{parse_training_log, read_training_log, DEFAULT_INPUT};
pub use report::{PanelSpec, ReportGenerator, SeriesStyle, PANELS};
pub use types::{Metric, ReportError, Result, TrainingLog, TrainingLogRow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
