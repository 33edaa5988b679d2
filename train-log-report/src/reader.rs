//! Training log CSV reader
//!
//! Loads a `train-log.csv` style file into a [`TrainingLog`]. The file must
//! have a header row naming at least the six required columns; records are
//! deserialized by header name through the `csv` crate.

use crate::types::{ReportError, Result, TrainingLog, TrainingLogRow};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Default training log file name
pub const DEFAULT_INPUT: &str = "train-log.csv";

/// Read a training log from disk
///
/// # Errors
/// * `InputMissing` - the file does not exist
/// * `InputEmpty` - the file has no data rows (header-only or zero bytes)
/// * `Csv` - a record is missing a column or has a non-numeric value
/// * `Io` - any other failure opening the file
///
/// # Example
/// ```no_run
/// use train_log_report::read_training_log;
/// use std::path::Path;
///
/// let log = read_training_log(Path::new("train-log.csv")).unwrap();
/// println!("{} episodes", log.len());
/// ```
pub fn read_training_log(path: &Path) -> Result<TrainingLog> {
    log::info!("Reading training log: {:?}", path);

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReportError::InputMissing(path.to_path_buf()),
        _ => ReportError::Io(e),
    })?;

    let log = parse_training_log(file, path)?;

    log::info!("Loaded {} rows from {:?}", log.len(), path);
    if let Some((first, last)) = log.episode_range() {
        log::debug!("Episode range: {}..={}", first, last);
    }

    Ok(log)
}

/// Parse training log records from any reader
///
/// `source` is only used to label errors.
pub fn parse_training_log<R: Read>(reader: R, source: &Path) -> Result<TrainingLog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<TrainingLogRow>() {
        let row = record.map_err(|e| ReportError::Csv {
            path: source.to_path_buf(),
            source: e,
        })?;
        log::trace!("Row: {:?}", row);
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ReportError::InputEmpty(source.to_path_buf()));
    }

    Ok(TrainingLog::from_rows(rows))
}
