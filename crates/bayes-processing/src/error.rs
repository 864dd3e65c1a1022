//! Error types for the preprocessing crate.
//!
//! All public API functions in this crate return [`Result<T>`], an alias for
//! `std::result::Result<T, ProcessingError>`.

use thiserror::Error;

/// The main error type for table construction, imputation and dataset I/O.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProcessingError {
    /// A row's column count disagrees with the first row of the table.
    ///
    /// Tables are rectangular by contract; ragged input is rejected at
    /// construction rather than surfacing later as an index panic.
    #[error("row {row} has {found} columns, expected {expected}")]
    MalformedTable {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A feature column contains only missing markers, so no mode exists.
    ///
    /// Raised by [`ModeImputer`](crate::ModeImputer) under
    /// [`UndefinedModePolicy::Fail`](crate::UndefinedModePolicy::Fail).
    #[error("column {column} has no observable mode: every value is missing")]
    UndefinedMode { column: usize },

    /// A key table is too narrow to provide (identifier, label) pairs.
    #[error("key table has {found} columns, expected at least 2")]
    MalformedKeyTable { found: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// Result type alias for preprocessing operations.
pub type Result<T> = std::result::Result<T, ProcessingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_table_message() {
        let err = ProcessingError::MalformedTable {
            row: 3,
            expected: 5,
            found: 4,
        };
        assert_eq!(err.to_string(), "row 3 has 4 columns, expected 5");
    }

    #[test]
    fn test_undefined_mode_message() {
        let err = ProcessingError::UndefinedMode { column: 2 };
        assert!(err.to_string().contains("column 2"));
        assert!(err.to_string().contains("no observable mode"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ProcessingError = io.into();
        assert!(matches!(err, ProcessingError::Io(_)));
    }
}
