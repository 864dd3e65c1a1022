//! Identifier-to-label key tables and the label merge step.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::table::Table;

/// Load a delimited file of (identifier, label) rows into a lookup map.
///
/// Only the first two columns are consulted. A duplicate identifier keeps the
/// value seen last, matching a plain map insert per row.
///
/// # Errors
///
/// Returns [`ProcessingError::MalformedKeyTable`] when the file has fewer
/// than two columns.
pub fn read_key_table(path: impl AsRef<Path>) -> Result<HashMap<String, String>> {
    let table = super::read_table(path)?;

    if !table.is_empty() && table.width() < 2 {
        return Err(ProcessingError::MalformedKeyTable {
            found: table.width(),
        });
    }

    let mut keys = HashMap::with_capacity(table.height());
    for row in table.rows() {
        keys.insert(row[0].clone(), row[1].clone());
    }
    Ok(keys)
}

/// Overwrite the label column of each row whose identifier matches a key.
///
/// Unmatched rows keep their existing label cell, typically the missing
/// placeholder. Returns the number of rows whose label was backfilled.
pub fn merge_labels(table: &mut Table, keys: &HashMap<String, String>) -> usize {
    let mut merged = 0usize;

    for row in table.rows_mut() {
        if row.len() < 2 {
            continue;
        }
        if let Some(label) = keys.get(&row[0]) {
            let last = row.len() - 1;
            row[last] = label.clone();
            merged += 1;
        }
    }

    debug!("Backfilled labels for {} rows", merged);
    merged
}
