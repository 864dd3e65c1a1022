//! Row-oriented table of opaque string fields.
//!
//! Every value in a table is kept as a string, numeric-looking or not; the
//! pipeline never coerces field types. The table is rectangular: every row
//! has the same column count, checked once at construction.

use crate::error::{ProcessingError, Result};

/// Literal marker denoting a missing value in any non-label column.
///
/// Test tables also use it as the label placeholder before the key merge
/// backfills ground truth.
pub const MISSING_MARKER: &str = "?";

/// An ordered sequence of rows, each an ordered sequence of string fields.
///
/// Column 0 holds the row identifier, the last column holds the target label,
/// and everything in between is a categorical feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from raw rows, validating the rectangular invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::MalformedTable`] naming the first row whose
    /// column count disagrees with row 0.
    pub fn new(rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            for (row, fields) in rows.iter().enumerate() {
                if fields.len() != expected {
                    return Err(ProcessingError::MalformedTable {
                        row,
                        expected,
                        found: fields.len(),
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (0 for an empty table).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Shared view of the rows in input order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Mutable per-row field access.
    ///
    /// Rows are handed out as slices so callers can rewrite cells but cannot
    /// change a row's length, preserving the rectangular invariant.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [String]> {
        self.rows.iter_mut().map(|row| row.as_mut_slice())
    }

    /// Iterate one column top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of bounds for a non-empty table.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[column].as_str())
    }

    /// Index of the label column, i.e. the last one. `None` for an empty table.
    pub fn label_column(&self) -> Option<usize> {
        self.width().checked_sub(1)
    }

    /// Cell lookup that returns `None` out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn owned(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_new_accepts_rectangular_rows() {
        let table = Table::new(owned(&[&["g1", "A", "loc1"], &["g2", "B", "loc2"]])).unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.width(), 3);
        assert_eq!(table.label_column(), Some(2));
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let result = Table::new(owned(&[&["g1", "A", "loc1"], &["g2", "B"]]));
        assert!(matches!(
            result,
            Err(ProcessingError::MalformedTable {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.width(), 0);
        assert_eq!(table.label_column(), None);
    }

    #[test]
    fn test_column_iteration() {
        let table = Table::new(owned(&[&["g1", "A", "loc1"], &["g2", "B", "loc2"]])).unwrap();
        let values: Vec<&str> = table.column(1).collect();
        assert_eq!(values, vec!["A", "B"]);
    }

    #[test]
    fn test_rows_mut_rewrites_cells() {
        let mut table = Table::new(owned(&[&["g1", "?", "loc1"]])).unwrap();
        for row in table.rows_mut() {
            if row[1] == MISSING_MARKER {
                row[1] = "A".to_string();
            }
        }
        assert_eq!(table.get(0, 1), Some("A"));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let table = Table::new(owned(&[&["g1", "A", "loc1"]])).unwrap();
        assert_eq!(table.get(0, 3), None);
        assert_eq!(table.get(1, 0), None);
    }
}
