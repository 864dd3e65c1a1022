//! Estimation of class priors and value likelihoods from a labeled table.

use std::collections::HashMap;

use bayes_processing::{MISSING_MARKER, Table};
use tracing::debug;

use crate::config::PipelineConfig;
use crate::error::{LearningError, Result};
use crate::model::{LikelihoodKey, NaiveBayesModel};

/// Fits a [`NaiveBayesModel`] from a fully imputed, fully labeled table.
pub struct Trainer {
    config: PipelineConfig,
}

impl Trainer {
    /// Create a trainer with the given pipeline configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Fit priors and likelihoods on `table`.
    ///
    /// The table layout is (identifier, features..., label). Class priors are
    /// relative label frequencies; for each feature column and class, value
    /// counts restricted to that class's rows are normalized by the class row
    /// count. Classes are recorded in first-observed row order, which fixes
    /// the deterministic tie-break order used at prediction time.
    ///
    /// # Errors
    ///
    /// - [`LearningError::EmptyTrainingSet`] for a zero-row table
    /// - [`LearningError::TooFewColumns`] when identifier or label is absent
    /// - [`LearningError::UnlabeledRow`] when a label cell is the missing
    ///   placeholder
    /// - [`LearningError::MissingFeatureValue`] when a feature cell is still
    ///   missing, i.e. the table was not imputed first
    pub fn fit(&self, table: &Table) -> Result<NaiveBayesModel> {
        if table.is_empty() {
            return Err(LearningError::EmptyTrainingSet);
        }
        if table.width() < 2 {
            return Err(LearningError::TooFewColumns {
                found: table.width(),
            });
        }

        let label_column = table.width() - 1;
        let feature_count = label_column - 1;

        // Class frequencies, first-observed order.
        let mut classes: Vec<String> = Vec::new();
        let mut class_counts: Vec<usize> = Vec::new();
        let mut class_index: HashMap<String, usize> = HashMap::new();
        for (row, fields) in table.rows().iter().enumerate() {
            let label = &fields[label_column];
            if label == MISSING_MARKER {
                return Err(LearningError::UnlabeledRow { row });
            }
            let class = *class_index.entry(label.clone()).or_insert_with(|| {
                classes.push(label.clone());
                class_counts.push(0);
                classes.len() - 1
            });
            class_counts[class] += 1;
        }

        // Value counts per (feature column, class).
        let mut value_counts: HashMap<LikelihoodKey, usize> = HashMap::new();
        for (row, fields) in table.rows().iter().enumerate() {
            let class = class_index[&fields[label_column]];
            for column in 0..feature_count {
                let value = &fields[column + 1];
                if value == MISSING_MARKER {
                    return Err(LearningError::MissingFeatureValue { row, column });
                }
                *value_counts
                    .entry(LikelihoodKey {
                        column,
                        class,
                        value: value.clone(),
                    })
                    .or_insert(0) += 1;
            }
        }

        let total = table.height() as f64;
        let priors: Vec<f64> = class_counts
            .iter()
            .map(|&count| count as f64 / total)
            .collect();
        let likelihoods: HashMap<LikelihoodKey, f64> = value_counts
            .into_iter()
            .map(|(key, count)| {
                let class_total = class_counts[key.class] as f64;
                (key, count as f64 / class_total)
            })
            .collect();

        debug!(
            "Fitted model: {} classes, {} feature columns, {} likelihood entries",
            classes.len(),
            feature_count,
            likelihoods.len()
        );

        Ok(NaiveBayesModel {
            classes,
            priors,
            likelihoods,
            feature_count,
            unseen_likelihood: self.config.unseen_likelihood,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        Table::new(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    fn trainer() -> Trainer {
        Trainer::new(PipelineConfig::default())
    }

    fn training_table() -> Table {
        table(&[
            &["g1", "A", "X", "loc1"],
            &["g2", "A", "Y", "loc1"],
            &["g3", "B", "X", "loc2"],
        ])
    }

    #[test]
    fn test_fit_priors_are_relative_frequencies() {
        let model = trainer().fit(&training_table()).unwrap();

        assert_eq!(
            model.classes().to_vec(),
            vec!["loc1".to_string(), "loc2".to_string()]
        );
        assert!((model.prior("loc1").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((model.prior("loc2").unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_priors_sum_to_one() {
        let model = trainer().fit(&training_table()).unwrap();
        let sum: f64 = model
            .classes()
            .iter()
            .map(|class| model.prior(class).unwrap())
            .sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_likelihoods_use_class_size_denominator() {
        let model = trainer().fit(&training_table()).unwrap();

        // Both loc1 rows carry "A" in the first feature column.
        assert_eq!(model.likelihood(0, "loc1", "A"), Some(1.0));
        assert_eq!(model.likelihood(1, "loc1", "X"), Some(0.5));
        assert_eq!(model.likelihood(1, "loc1", "Y"), Some(0.5));
        assert_eq!(model.likelihood(0, "loc2", "B"), Some(1.0));
    }

    #[test]
    fn test_fit_per_class_likelihoods_sum_to_one() {
        let model = trainer().fit(&training_table()).unwrap();

        for class in 0..model.classes.len() {
            for column in 0..model.feature_count {
                let sum: f64 = model
                    .likelihoods
                    .iter()
                    .filter(|(key, _)| key.class == class && key.column == column)
                    .map(|(_, likelihood)| likelihood)
                    .sum();
                assert!(
                    (sum - 1.0).abs() < 1e-12,
                    "class {} column {} sums to {}",
                    class,
                    column,
                    sum
                );
            }
        }
    }

    #[test]
    fn test_fit_is_deterministic() {
        let first = trainer().fit(&training_table()).unwrap();
        let second = trainer().fit(&training_table()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fit_rejects_empty_table() {
        let result = trainer().fit(&Table::new(Vec::new()).unwrap());
        assert!(matches!(result, Err(LearningError::EmptyTrainingSet)));
    }

    #[test]
    fn test_fit_rejects_single_column_table() {
        let result = trainer().fit(&table(&[&["loc1"]]));
        assert!(matches!(
            result,
            Err(LearningError::TooFewColumns { found: 1 })
        ));
    }

    #[test]
    fn test_fit_rejects_missing_label() {
        let result = trainer().fit(&table(&[
            &["g1", "A", "loc1"],
            &["g2", "B", "?"],
        ]));
        assert!(matches!(result, Err(LearningError::UnlabeledRow { row: 1 })));
    }

    #[test]
    fn test_fit_rejects_unimputed_feature() {
        let result = trainer().fit(&table(&[
            &["g1", "A", "X", "loc1"],
            &["g2", "?", "Y", "loc1"],
        ]));
        assert!(matches!(
            result,
            Err(LearningError::MissingFeatureValue { row: 1, column: 0 })
        ));
    }

    #[test]
    fn test_fit_carries_configured_smoothing() {
        let config = PipelineConfig::builder()
            .unseen_likelihood(0.25)
            .build()
            .unwrap();
        let model = Trainer::new(config).fit(&training_table()).unwrap();
        assert_eq!(model.unseen_likelihood(), 0.25);
    }
}
