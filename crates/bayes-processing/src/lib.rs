//! Tabular preprocessing for the categorical Naive Bayes pipeline.
//!
//! # Overview
//!
//! This crate owns everything that happens to a dataset before a model sees it:
//!
//! - **Table model**: a row-oriented table of opaque string fields, with a
//!   uniform column count enforced at construction
//! - **Imputation**: per-column mode imputation of missing categorical values
//! - **Dataset I/O**: reading delimited text into a [`Table`], writing
//!   prediction records back out, and loading identifier-to-label key tables
//! - **Label merge**: backfilling the label column of a test table from a key
//!   table before evaluation
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bayes_processing::dataset::{merge_labels, read_key_table, read_table};
//! use bayes_processing::{ModeImputer, UndefinedModePolicy};
//!
//! let mut table = read_table("genes.data")?;
//!
//! let mut steps = Vec::new();
//! let imputer = ModeImputer::new(UndefinedModePolicy::Fail);
//! imputer.impute(&mut table, &mut steps)?;
//!
//! let keys = read_key_table("keys.txt")?;
//! let merged = merge_labels(&mut table, &keys);
//! println!("Backfilled {} labels", merged);
//! ```
//!
//! # Conventions
//!
//! A table's column 0 is an identifier, its last column is the target label,
//! and every other column is a categorical feature kept as an opaque string.
//! The literal [`MISSING_MARKER`] (`"?"`) denotes a missing value in any
//! non-label column.

pub mod dataset;
pub mod error;
pub mod imputers;
pub mod table;

// Re-exports for convenient access
pub use dataset::{merge_labels, read_key_table, read_table, write_predictions};
pub use error::{ProcessingError, Result as ProcessingResult};
pub use imputers::{ModeImputer, UndefinedModePolicy};
pub use table::{MISSING_MARKER, Table};
