//! Batch evaluation: per-row predictions plus accuracy against ground truth.

use bayes_processing::Table;
use serde::Serialize;
use tracing::debug;

use crate::error::{LearningError, Result};
use crate::model::NaiveBayesModel;

/// One emitted prediction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// The row's identifier (column 0 of the evaluated table).
    pub identifier: String,
    /// The predicted class label.
    pub label: String,
}

/// Outcome of scoring a held-out table.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Prediction records in input row order.
    pub predictions: Vec<Prediction>,
    /// Number of rows whose prediction matched the actual label.
    pub correct: usize,
    /// Total number of rows scored.
    pub total: usize,
}

impl Evaluation {
    /// Accuracy as a percentage.
    pub fn accuracy(&self) -> f64 {
        self.correct as f64 / self.total as f64 * 100.0
    }

    /// Two-decimal display form, e.g. `"66.67%"`.
    pub fn accuracy_display(&self) -> String {
        format!("{:.2}%", self.accuracy())
    }

    /// The predictions as (identifier, label) pairs for the table writer.
    pub fn as_records(&self) -> Vec<(String, String)> {
        self.predictions
            .iter()
            .map(|prediction| (prediction.identifier.clone(), prediction.label.clone()))
            .collect()
    }
}

/// Predict every row of `table` and tally accuracy against its label column.
///
/// Column 0 of each row is the identifier; the remaining columns are handed
/// to the model as features plus the actual label, which the scorer ignores
/// but this function compares against.
///
/// # Errors
///
/// - [`LearningError::EmptyEvaluationSet`] for a zero-row table, where
///   accuracy would be 0/0
/// - [`LearningError::TooFewColumns`] when identifier or label is absent
/// - [`LearningError::SchemaMismatch`] when the table's feature count
///   disagrees with the fitted model
pub fn evaluate(model: &NaiveBayesModel, table: &Table) -> Result<Evaluation> {
    if table.is_empty() {
        return Err(LearningError::EmptyEvaluationSet);
    }
    if table.width() < 2 {
        return Err(LearningError::TooFewColumns {
            found: table.width(),
        });
    }

    let mut predictions = Vec::with_capacity(table.height());
    let mut correct = 0usize;

    for row in table.rows() {
        let predicted = model.predict(&row[1..])?;
        let actual = &row[row.len() - 1];
        if predicted == actual.as_str() {
            correct += 1;
        }
        predictions.push(Prediction {
            identifier: row[0].clone(),
            label: predicted.to_string(),
        });
    }

    let evaluation = Evaluation {
        predictions,
        correct,
        total: table.height(),
    };
    debug!(
        "Scored {} rows: {} correct ({})",
        evaluation.total,
        evaluation.correct,
        evaluation.accuracy_display()
    );
    Ok(evaluation)
}
