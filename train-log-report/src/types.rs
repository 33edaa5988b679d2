//! Core types for the training log report library
//!
//! This module defines the row type read from a training log, the in-memory
//! log table, the metric columns that can be plotted, and the error type.
//! The table is read once and never mutated.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// One completed training episode as written by the trainer
///
/// Fields are matched to CSV columns by header name; any additional columns
/// in the file are ignored. A blank metric cell reads as NaN and is drawn as a
/// gap; non-numeric text is still a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLogRow {
    /// Episode ordinal, the x-axis key for every chart
    pub episode: u64,
    /// Total reward collected in the episode
    #[serde(deserialize_with = "blank_as_nan")]
    pub reward: f64,
    /// Rolling average of reward over the last 100 episodes (computed upstream)
    #[serde(deserialize_with = "blank_as_nan")]
    pub avg100: f64,
    /// Training loss (typically an EMA)
    #[serde(deserialize_with = "blank_as_nan")]
    pub loss: f64,
    /// Exploration rate of the epsilon-greedy policy
    #[serde(deserialize_with = "blank_as_nan")]
    pub epsilon: f64,
    /// Environment steps processed per wall-clock second
    #[serde(deserialize_with = "blank_as_nan")]
    pub steps_per_sec: f64,
}

fn blank_as_nan<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f64> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(f64::NAN))
}

impl TrainingLogRow {
    /// Value of a metric column for this row
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Reward => self.reward,
            Metric::Avg100 => self.avg100,
            Metric::Loss => self.loss,
            Metric::Epsilon => self.epsilon,
            Metric::StepsPerSec => self.steps_per_sec,
        }
    }
}

/// Numeric columns that can be plotted against the episode index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Reward,
    Avg100,
    Loss,
    Epsilon,
    StepsPerSec,
}

impl Metric {
    /// All plottable metrics in column order
    pub const ALL: [Metric; 5] = [
        Metric::Reward,
        Metric::Avg100,
        Metric::Loss,
        Metric::Epsilon,
        Metric::StepsPerSec,
    ];

    /// CSV header name of this metric
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Reward => "reward",
            Metric::Avg100 => "avg100",
            Metric::Loss => "loss",
            Metric::Epsilon => "epsilon",
            Metric::StepsPerSec => "steps_per_sec",
        }
    }

    /// Human readable series label
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Reward => "Episode Reward",
            Metric::Avg100 => "Avg100 Reward",
            Metric::Loss => "Loss",
            Metric::Epsilon => "Epsilon",
            Metric::StepsPerSec => "Steps/Second",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// A training log held in memory, rows in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingLog {
    rows: Vec<TrainingLogRow>,
}

impl TrainingLog {
    /// Wrap already-loaded rows
    pub fn from_rows(rows: Vec<TrainingLogRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TrainingLogRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Episode column as x coordinates
    pub fn episodes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.episode as f64).collect()
    }

    /// `(episode, value)` points for one metric, in file order
    pub fn series(&self, metric: Metric) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|r| (r.episode as f64, r.value(metric)))
            .collect()
    }

    /// First and last episode numbers, if the log has any rows
    pub fn episode_range(&self) -> Option<(u64, u64)> {
        let first = self.rows.first()?.episode;
        let last = self.rows.last()?.episode;
        Some((first, last))
    }
}

/// Errors that can occur while loading or rendering a training log
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Training log not found: {0:?}")]
    InputMissing(PathBuf),

    #[error("Training log is empty: {0:?}")]
    InputEmpty(PathBuf),

    #[error("Failed to parse training log {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to render report: {0}")]
    Render(String),

    #[error("Invalid report configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(episode: u64, reward: f64) -> TrainingLogRow {
        TrainingLogRow {
            episode,
            reward,
            avg100: reward / 2.0,
            loss: 0.5,
            epsilon: 1.0,
            steps_per_sec: 50.0,
        }
    }

    #[test]
    fn test_series_follows_file_order() {
        let log = TrainingLog::from_rows(vec![row(0, 1.0), row(1, 2.0), row(2, 1.5)]);

        assert_eq!(log.len(), 3);
        assert_eq!(log.episodes(), vec![0.0, 1.0, 2.0]);
        assert_eq!(
            log.series(Metric::Reward),
            vec![(0.0, 1.0), (1.0, 2.0), (2.0, 1.5)]
        );
        assert_eq!(log.series(Metric::Avg100)[1], (1.0, 1.0));
        assert_eq!(log.episode_range(), Some((0, 2)));
    }

    #[test]
    fn test_empty_log() {
        let log = TrainingLog::default();
        assert!(log.is_empty());
        assert_eq!(log.episode_range(), None);
        assert!(log.series(Metric::Loss).is_empty());
    }

    #[test]
    fn test_metric_columns() {
        let columns: Vec<&str> = Metric::ALL.iter().map(|m| m.column()).collect();
        assert_eq!(
            columns,
            vec!["reward", "avg100", "loss", "epsilon", "steps_per_sec"]
        );
        assert_eq!(format!("{}", Metric::StepsPerSec), "steps_per_sec");
    }
}
