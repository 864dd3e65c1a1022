//! Fitted model: class priors and class-conditional value likelihoods.

use std::collections::HashMap;

use crate::error::{LearningError, Result};

/// Composite lookup key for one class-conditional value probability.
///
/// Keying likelihoods on (feature column, class, value) in a single hashed
/// map makes the unseen-value case a plain `None` from one lookup instead of
/// a chain of nested-map existence checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct LikelihoodKey {
    pub(crate) column: usize,
    pub(crate) class: usize,
    pub(crate) value: String,
}

/// A fitted categorical Naive Bayes model.
///
/// Immutable once built by [`Trainer::fit`](crate::Trainer::fit); the trainer
/// is the only constructor, which guarantees non-empty classes and strictly
/// positive priors.
///
/// # Example
///
/// ```rust,ignore
/// let model = Trainer::new(PipelineConfig::default()).fit(&training)?;
///
/// // row layout: feature values followed by the (ignored) label cell
/// let row = vec!["A".to_string(), "X".to_string(), "?".to_string()];
/// println!("Predicted: {}", model.predict(&row)?);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayesModel {
    /// Class labels in first-observed training order.
    pub(crate) classes: Vec<String>,
    /// Relative class frequencies, parallel with `classes`.
    pub(crate) priors: Vec<f64>,
    pub(crate) likelihoods: HashMap<LikelihoodKey, f64>,
    pub(crate) feature_count: usize,
    pub(crate) unseen_likelihood: f64,
}

impl NaiveBayesModel {
    /// Class labels in the order they were first observed during training.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of feature columns the model was fitted on.
    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// The pseudo-probability charged for unseen feature values.
    pub fn unseen_likelihood(&self) -> f64 {
        self.unseen_likelihood
    }

    /// Prior probability of a class, or `None` for an unknown label.
    pub fn prior(&self, class: &str) -> Option<f64> {
        let index = self.class_index(class)?;
        Some(self.priors[index])
    }

    /// Estimated `P(value | class)` for a feature column, or `None` when the
    /// value was never observed for that class during training.
    pub fn likelihood(&self, column: usize, class: &str, value: &str) -> Option<f64> {
        let class = self.class_index(class)?;
        self.likelihoods
            .get(&LikelihoodKey {
                column,
                class,
                value: value.to_string(),
            })
            .copied()
    }

    /// Log-domain posterior score of one class for a row.
    ///
    /// `row` holds the feature values followed by a trailing label cell,
    /// which is ignored. Returns `None` for an unknown class label.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::SchemaMismatch`] when the row's feature count
    /// disagrees with the fitted model.
    pub fn log_score(&self, class: &str, row: &[String]) -> Result<Option<f64>> {
        self.validate_row(row)?;
        Ok(self
            .class_index(class)
            .map(|index| self.score_class(index, row)))
    }

    /// Predict the most probable class for a row.
    ///
    /// `row` holds the feature values followed by a trailing label cell,
    /// which is ignored. Classes are scored in first-observed order and a
    /// later class with an exactly equal score does not displace the first
    /// maximum, keeping prediction deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::SchemaMismatch`] when the row's feature count
    /// disagrees with the fitted model.
    pub fn predict(&self, row: &[String]) -> Result<&str> {
        self.validate_row(row)?;

        let mut best_class = 0usize;
        let mut best_score = f64::NEG_INFINITY;
        for class in 0..self.classes.len() {
            let score = self.score_class(class, row);
            if score > best_score {
                best_score = score;
                best_class = class;
            }
        }

        Ok(&self.classes[best_class])
    }

    fn score_class(&self, class: usize, row: &[String]) -> f64 {
        let smoothing = self.unseen_likelihood.ln();
        let mut score = self.priors[class].ln();
        for (column, value) in row[..self.feature_count].iter().enumerate() {
            let key = LikelihoodKey {
                column,
                class,
                value: value.clone(),
            };
            score += match self.likelihoods.get(&key) {
                Some(likelihood) => likelihood.ln(),
                None => smoothing,
            };
        }
        score
    }

    fn class_index(&self, class: &str) -> Option<usize> {
        self.classes.iter().position(|known| known == class)
    }

    fn validate_row(&self, row: &[String]) -> Result<()> {
        let found = row.len().saturating_sub(1);
        if found != self.feature_count {
            return Err(LearningError::SchemaMismatch {
                expected: self.feature_count,
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::PipelineConfig;
    use crate::trainer::Trainer;
    use bayes_processing::Table;

    fn table(rows: &[&[&str]]) -> Table {
        Table::new(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    fn fitted_model() -> NaiveBayesModel {
        let training = table(&[
            &["g1", "A", "X", "loc1"],
            &["g2", "A", "Y", "loc1"],
            &["g3", "B", "X", "loc2"],
        ]);
        Trainer::new(PipelineConfig::default())
            .fit(&training)
            .unwrap()
    }

    #[test]
    fn test_predict_matching_likelihoods_dominate() {
        let model = fitted_model();
        let predicted = model.predict(&row(&["A", "X", "?"])).unwrap();
        assert_eq!(predicted, "loc1");
    }

    #[test]
    fn test_predict_rejects_wrong_width() {
        let model = fitted_model();
        let result = model.predict(&row(&["A", "?"]));
        assert!(matches!(
            result,
            Err(LearningError::SchemaMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_predict_equal_scores_keep_first_class() {
        // Symmetric training data: both classes score identically on this row.
        let training = table(&[&["g1", "A", "loc1"], &["g2", "B", "loc2"]]);
        let model = Trainer::new(PipelineConfig::default())
            .fit(&training)
            .unwrap();

        let predicted = model.predict(&row(&["C", "?"])).unwrap();
        assert_eq!(predicted, "loc1");
    }

    #[test]
    fn test_log_score_unseen_value_contributes_smoothing_constant() {
        let model = fitted_model();

        // "B" was never observed for loc1; the only difference from scoring
        // "A" is one smoothing term replacing ln(1.0).
        let seen = model.log_score("loc1", &row(&["A", "X", "?"])).unwrap().unwrap();
        let unseen = model.log_score("loc1", &row(&["B", "X", "?"])).unwrap().unwrap();

        let expected_delta = 0.01f64.ln() - 1.0f64.ln();
        assert!((unseen - seen - expected_delta).abs() < 1e-12);
    }

    #[test]
    fn test_log_score_unknown_class() {
        let model = fitted_model();
        let score = model.log_score("loc9", &row(&["A", "X", "?"])).unwrap();
        assert_eq!(score, None);
    }

    #[test]
    fn test_likelihood_lookup() {
        let model = fitted_model();
        assert_eq!(model.likelihood(0, "loc1", "A"), Some(1.0));
        assert_eq!(model.likelihood(1, "loc1", "X"), Some(0.5));
        assert_eq!(model.likelihood(0, "loc1", "B"), None);
    }

    #[test]
    fn test_prior_lookup() {
        let model = fitted_model();
        let prior = model.prior("loc1").unwrap();
        assert!((prior - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(model.prior("loc9"), None);
    }
}
