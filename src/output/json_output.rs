//! JSON results file
//!
//! Serializes the full record list as pretty-printed JSON. Absent fields
//! appear as `null` and the image list is always present, so consumers see
//! the same shape for summary and detail runs.

use crate::listing::ListingRecord;
use crate::output::{OutputError, OutputResult};
use std::path::Path;
use tracing::info;

/// Writes all records to a JSON file
///
/// # Arguments
///
/// * `records` - The records to persist, in discovery order
/// * `path` - Destination file, replaced if it already exists
pub fn write_json(records: &[ListingRecord], path: &Path) -> OutputResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(|source| OutputError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!("saved {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writes_pretty_json_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");

        let mut record = ListingRecord::url_only("https://www.olx.in/item/cover".to_string());
        record.title = Some("Waterproof car cover".to_string());

        write_json(&[record], &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n"));
        assert!(written.contains("\"title\": \"Waterproof car cover\""));
        assert!(written.contains("\"price\": null"));

        let parsed: Vec<ListingRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title.as_deref(), Some("Waterproof car cover"));
    }

    #[test]
    fn test_empty_run_writes_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");

        write_json(&[], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_unwritable_path_reports_io_error() {
        let result = write_json(&[], Path::new("/nonexistent/dir/results.json"));
        assert!(matches!(result, Err(OutputError::Io { .. })));
    }
}
