//! CSV results file
//!
//! One row per record with a fixed column set. Absent fields become empty
//! cells and the image list is embedded as a JSON array string, so a single
//! flat schema covers both summary and detail runs.

use crate::listing::ListingRecord;
use crate::output::{OutputError, OutputResult};
use std::path::Path;
use tracing::info;

/// Column order for the CSV file
const COLUMNS: [&str; 7] = [
    "title",
    "url",
    "price",
    "location",
    "description",
    "images",
    "snippet",
];

/// Writes all records to a CSV file
///
/// # Arguments
///
/// * `records` - The records to persist, in discovery order
/// * `path` - Destination file, replaced if it already exists
pub fn write_csv(records: &[ListingRecord], path: &Path) -> OutputResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;

    for record in records {
        let images = serde_json::to_string(&record.images)?;
        writer.write_record([
            record.title.as_deref().unwrap_or(""),
            record.url.as_str(),
            record.price.as_deref().unwrap_or(""),
            record.location.as_deref().unwrap_or(""),
            record.description.as_deref().unwrap_or(""),
            images.as_str(),
            record.snippet.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush().map_err(|source| OutputError::Io {
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
    fn test_header_row_is_fixed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        write_csv(&[], &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written.lines().next(),
            Some("title,url,price,location,description,images,snippet")
        );
    }

    #[test]
    fn test_populated_record_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let mut record = ListingRecord::url_only("https://www.olx.in/item/cover".to_string());
        record.title = Some("Car cover".to_string());
        record.price = Some("₹ 1,299".to_string());
        record.images = vec![
            "https://img.olx.in/a.jpg".to_string(),
            "https://img.olx.in/b.jpg".to_string(),
        ];

        write_csv(&[record], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "Car cover");
        assert_eq!(&row[1], "https://www.olx.in/item/cover");
        assert_eq!(&row[2], "₹ 1,299");
        assert_eq!(
            &row[5],
            r#"["https://img.olx.in/a.jpg","https://img.olx.in/b.jpg"]"#
        );
    }

    #[test]
    fn test_absent_fields_are_empty_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let record = ListingRecord::url_only("https://www.olx.in/item/bare".to_string());
        write_csv(&[record], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "");
        assert_eq!(&row[1], "https://www.olx.in/item/bare");
        assert_eq!(&row[3], "");
        assert_eq!(&row[5], "[]");
        assert_eq!(&row[6], "");
    }
}
