//! Output module for persisting sweep results
//!
//! This module handles:
//! - Writing the full record list as pretty-printed JSON
//! - Writing a flat CSV projection of the same records
//!
//! Both files are written once, after the sweep finishes, so a failed run
//! never leaves a partially updated results pair behind.

mod csv_output;
mod json_output;

pub use csv_output::write_csv;
pub use json_output::write_json;

use crate::config::OutputConfig;
use crate::listing::ListingRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes the results pair for a finished sweep
///
/// # Arguments
///
/// * `records` - The records to persist, in discovery order
/// * `config` - Destination paths for the JSON and CSV files
///
/// # Returns
///
/// * `Ok(())` - Both files were written
/// * `Err(OutputError)` - The first write that failed
pub fn write_outputs(records: &[ListingRecord], config: &OutputConfig) -> OutputResult<()> {
    write_json(records, Path::new(&config.json_path))?;
    write_csv(records, Path::new(&config.csv_path))?;
    Ok(())
}
