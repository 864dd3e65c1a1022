//! Writing prediction records as delimited text.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;

/// Persist (identifier, predicted label) pairs as a headerless CSV file,
/// preserving input row order.
pub fn write_predictions(path: impl AsRef<Path>, records: &[(String, String)]) -> Result<()> {
    let path = path.as_ref();

    let identifiers: Vec<&str> = records.iter().map(|(identifier, _)| identifier.as_str()).collect();
    let labels: Vec<&str> = records.iter().map(|(_, label)| label.as_str()).collect();

    let mut df = df!(
        "identifier" => identifiers,
        "label" => labels
    )?;

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(false).finish(&mut df)?;

    debug!("Wrote {} prediction rows to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn record(identifier: &str, label: &str) -> (String, String) {
        (identifier.to_string(), label.to_string())
    }

    #[test]
    fn test_write_predictions_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("predictions.csv");
        let records = vec![record("g1", "loc1"), record("g2", "loc2")];

        write_predictions(&path, &records).unwrap();

        let table = crate::dataset::read_table(&path).unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.get(0, 0), Some("g1"));
        assert_eq!(table.get(0, 1), Some("loc1"));
        assert_eq!(table.get(1, 1), Some("loc2"));
    }

    #[test]
    fn test_write_predictions_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("predictions.csv");
        let records = vec![
            record("g3", "loc2"),
            record("g1", "loc1"),
            record("g2", "loc1"),
        ];

        write_predictions(&path, &records).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["g3,loc2", "g1,loc1", "g2,loc1"]);
    }

    #[test]
    fn test_write_predictions_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("predictions.csv");

        write_predictions(&path, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.trim().is_empty());
    }
}
