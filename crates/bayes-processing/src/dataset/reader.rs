//! Reading delimited text into a [`Table`].

use std::path::Path;

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::table::{MISSING_MARKER, Table};

/// Read a headerless delimited-text file into a [`Table`].
///
/// Schema inference is disabled so every column, numeric-looking or not, is
/// kept as an opaque string column. Null cells (empty fields) map to the
/// missing marker and surrounding whitespace is trimmed from each field.
///
/// # Errors
///
/// Propagates IO and parse failures; ragged input is rejected.
pub fn read_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();

    let df = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let table = table_from_dataframe(&df)?;
    debug!(
        "Read {} rows x {} columns from {}",
        table.height(),
        table.width(),
        path.display()
    );
    Ok(table)
}

/// Transpose a fully string-typed DataFrame into row-major form.
fn table_from_dataframe(df: &DataFrame) -> Result<Table> {
    let mut rows: Vec<Vec<String>> = vec![Vec::with_capacity(df.width()); df.height()];

    for column in df.get_columns() {
        let series = column.as_materialized_series().cast(&DataType::String)?;
        let values = series.str()?;
        for (row, cell) in rows.iter_mut().zip(values.into_iter()) {
            row.push(cell.map_or_else(|| MISSING_MARKER.to_string(), |value| value.trim().to_string()));
        }
    }

    Table::new(rows)
}
