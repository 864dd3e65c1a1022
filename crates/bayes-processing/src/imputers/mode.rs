//! Mode imputation for categorical columns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};
use crate::table::{MISSING_MARKER, Table};

/// Handling of a feature column whose values are all missing.
///
/// Such a column has no observable mode, so imputation cannot invent a fill
/// value for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UndefinedModePolicy {
    /// Surface [`ProcessingError::UndefinedMode`]
    #[default]
    Fail,
    /// Leave the column's missing markers in place
    LeaveMissing,
}

/// Fills missing cells with the per-column most frequent value.
pub struct ModeImputer {
    policy: UndefinedModePolicy,
}

impl ModeImputer {
    /// Create an imputer with the given all-missing-column policy.
    pub fn new(policy: UndefinedModePolicy) -> Self {
        Self { policy }
    }

    /// Replace every missing marker in each non-label column with that
    /// column's mode.
    ///
    /// The table is mutated in place; this is the one documented mutation in
    /// the pipeline. Human-readable descriptions of the work done are pushed
    /// onto `processing_steps`. Running the imputer again on the result is a
    /// no-op: with no missing cells left, every column keeps its values.
    ///
    /// # Errors
    ///
    /// Under [`UndefinedModePolicy::Fail`], returns
    /// [`ProcessingError::UndefinedMode`] for the first column whose values
    /// are all missing.
    pub fn impute(&self, table: &mut Table, processing_steps: &mut Vec<String>) -> Result<()> {
        let Some(label_column) = table.label_column() else {
            return Ok(());
        };

        for column in 0..label_column {
            let Some(mode) = Self::column_mode(table, column) else {
                match self.policy {
                    UndefinedModePolicy::Fail => {
                        return Err(ProcessingError::UndefinedMode { column });
                    }
                    UndefinedModePolicy::LeaveMissing => {
                        processing_steps
                            .push(format!("Column {}: no observable mode, left unfilled", column));
                        continue;
                    }
                }
            };

            let mut filled = 0usize;
            for row in table.rows_mut() {
                if row[column] == MISSING_MARKER {
                    row[column] = mode.clone();
                    filled += 1;
                }
            }

            if filled > 0 {
                processing_steps.push(format!(
                    "Filled {} cells in column {} with mode: '{}'",
                    filled, column, mode
                ));
            }
        }

        Ok(())
    }

    /// Most frequent non-missing value of a column.
    ///
    /// Ties are resolved in favor of the value first observed in row order,
    /// which keeps the result stable for a given row ordering. Returns `None`
    /// when every value in the column is missing.
    pub fn column_mode(table: &Table, column: usize) -> Option<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for value in table.column(column) {
            if value == MISSING_MARKER {
                continue;
            }
            let count = counts.entry(value).or_insert(0);
            if *count == 0 {
                first_seen.push(value);
            }
            *count += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for value in first_seen {
            let count = counts[value];
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((value, count)),
            }
        }

        best.map(|(value, _)| value.to_string())
    }
}
