//! End-to-end orchestration: impute, fit, merge labels, evaluate.
//!
//! This module provides the core [`Pipeline`] struct and builder for running
//! the full classification workflow over in-memory tables.

use std::collections::HashMap;
use std::time::Instant;

use bayes_processing::{ModeImputer, Table, dataset::merge_labels};
use serde::Serialize;
use tracing::info;

use crate::config::{ConfigValidationError, PipelineConfig};
use crate::error::Result;
use crate::evaluator::{Evaluation, evaluate};
use crate::model::NaiveBayesModel;
use crate::trainer::Trainer;

/// Serializable record of what a pipeline run did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineSummary {
    /// Total execution time in milliseconds.
    pub duration_ms: u64,
    /// Number of training rows the model was fitted on.
    pub training_rows: usize,
    /// Number of test rows scored.
    pub test_rows: usize,
    /// Column count of the tables (identifier, features, label).
    pub columns: usize,
    /// Number of distinct classes observed during training.
    pub classes: usize,
    /// Number of test rows whose label was backfilled from the key table.
    pub merged_labels: usize,
    /// Human-readable descriptions of the imputation work performed.
    pub processing_steps: Vec<String>,
    /// Accuracy on the test table, as a percentage.
    pub accuracy: f64,
}

/// Output of a full pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The fitted model.
    pub model: NaiveBayesModel,
    /// Predictions and accuracy on the test table.
    pub evaluation: Evaluation,
    /// Run summary for reporting.
    pub summary: PipelineSummary,
}

/// The main classification pipeline.
///
/// Use [`Pipeline::builder()`] to create a pipeline with custom
/// configuration.
///
/// # Example
///
/// ```rust,ignore
/// let outcome = Pipeline::builder()
///     .config(PipelineConfig::builder().unseen_likelihood(0.01).build()?)
///     .build()?
///     .run(training, test, &keys)?;
///
/// println!("Accuracy: {}", outcome.evaluation.accuracy_display());
/// ```
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline builder.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Impute the training table in place and fit a model on it.
    pub fn train(
        &self,
        training: &mut Table,
        processing_steps: &mut Vec<String>,
    ) -> Result<NaiveBayesModel> {
        info!("Step 1: Imputing training table...");
        let imputer = ModeImputer::new(self.config.undefined_mode_policy);
        imputer.impute(training, processing_steps)?;

        info!("Step 2: Fitting priors and likelihoods...");
        Trainer::new(self.config.clone()).fit(training)
    }

    /// Impute the test table in place, backfill its labels from `keys`, and
    /// score every row. Returns the evaluation and the backfilled-row count.
    pub fn score(
        &self,
        model: &NaiveBayesModel,
        test: &mut Table,
        keys: &HashMap<String, String>,
        processing_steps: &mut Vec<String>,
    ) -> Result<(Evaluation, usize)> {
        info!("Step 3: Imputing test table...");
        let imputer = ModeImputer::new(self.config.undefined_mode_policy);
        imputer.impute(test, processing_steps)?;

        info!("Step 4: Backfilling test labels from key table...");
        let merged = merge_labels(test, keys);

        info!("Step 5: Scoring test rows...");
        let evaluation = evaluate(model, test)?;
        Ok((evaluation, merged))
    }

    /// Run the full train-and-evaluate pipeline.
    ///
    /// Takes the tables by value: both are imputed in place and the test
    /// table additionally gets its labels backfilled before scoring.
    pub fn run(
        &self,
        mut training: Table,
        mut test: Table,
        keys: &HashMap<String, String>,
    ) -> Result<PipelineOutcome> {
        let start = Instant::now();
        let mut processing_steps = Vec::new();

        let model = self.train(&mut training, &mut processing_steps)?;
        let (evaluation, merged) = self.score(&model, &mut test, keys, &mut processing_steps)?;

        let summary = PipelineSummary {
            duration_ms: start.elapsed().as_millis() as u64,
            training_rows: training.height(),
            test_rows: test.height(),
            columns: training.width(),
            classes: model.classes().len(),
            merged_labels: merged,
            processing_steps,
            accuracy: evaluation.accuracy(),
        };

        info!(
            "Pipeline complete: accuracy {}",
            evaluation.accuracy_display()
        );

        Ok(PipelineOutcome {
            model,
            evaluation,
            summary,
        })
    }
}

/// Builder for creating a [`Pipeline`] instance.
#[derive(Default)]
pub struct PipelineBuilder {
    config: Option<PipelineConfig>,
}

impl PipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the pipeline.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> std::result::Result<Pipeline, ConfigValidationError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(Pipeline { config })
    }
}
