//! Error types for the bayes-learning crate.
//!
//! This module defines [`LearningError`], the main error type used throughout
//! the crate. All public API functions return `Result<T, LearningError>`.
//!
//! Invalid input halts the run with a diagnosable cause; nothing here is
//! caught and downgraded to a default.

use thiserror::Error;

/// The main error type for training, inference and evaluation.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LearningError {
    /// Priors are undefined over zero rows.
    #[error("cannot fit a model on an empty table")]
    EmptyTrainingSet,

    /// Accuracy is undefined over zero rows.
    #[error("cannot evaluate on an empty table")]
    EmptyEvaluationSet,

    /// The table lacks the identifier and label columns the row layout needs.
    #[error("table needs at least an identifier and a label column, got {found}")]
    TooFewColumns { found: usize },

    /// A training row's label is the missing placeholder.
    ///
    /// Labels are never imputed; a training table with unknown labels is
    /// rejected rather than silently filled.
    #[error("row {row} has a missing label; labels are never imputed")]
    UnlabeledRow { row: usize },

    /// A training row still contains a missing feature value.
    ///
    /// Fitting requires a fully imputed table; run the imputer first.
    #[error("row {row}, feature column {column} is missing; fit requires an imputed table")]
    MissingFeatureValue { row: usize, column: usize },

    /// A row's feature count disagrees with the fitted model.
    #[error("row has {found} feature columns, model was fitted on {expected}")]
    SchemaMismatch { expected: usize, found: usize },

    /// Invalid configuration provided.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigValidationError),

    /// Error propagated from the preprocessing crate.
    #[error(transparent)]
    Processing(#[from] bayes_processing::ProcessingError),

    /// I/O error during report or prediction output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for learning operations.
pub type Result<T> = std::result::Result<T, LearningError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_message() {
        let err = LearningError::SchemaMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "row has 2 feature columns, model was fitted on 3"
        );
    }

    #[test]
    fn test_processing_error_is_transparent() {
        let inner = bayes_processing::ProcessingError::UndefinedMode { column: 1 };
        let message = inner.to_string();
        let err: LearningError = inner.into();
        assert_eq!(err.to_string(), message);
    }
}
