//! Categorical Naive Bayes training, inference and evaluation.
//!
//! # Overview
//!
//! This crate fits a Naive Bayes classifier on a fully imputed, labeled
//! [`Table`](bayes_processing::Table) and scores held-out rows with it:
//!
//! - **Training**: class priors from label frequencies, class-conditional
//!   value likelihoods per feature column
//! - **Inference**: log-domain scoring with a fixed pseudo-probability for
//!   feature values never observed for a class
//! - **Evaluation**: per-row predictions plus accuracy against ground truth
//! - **Pipeline**: end-to-end orchestration of impute, fit, label merge and
//!   scoring, with a serializable run summary
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bayes_learning::{Pipeline, PipelineConfig};
//! use bayes_processing::dataset::{read_key_table, read_table, write_predictions};
//!
//! let training = read_table("genes.data")?;
//! let test = read_table("genes.test")?;
//! let keys = read_key_table("keys.txt")?;
//!
//! let pipeline = Pipeline::builder()
//!     .config(PipelineConfig::default())
//!     .build()?;
//!
//! let outcome = pipeline.run(training, test, &keys)?;
//! println!("Accuracy: {}", outcome.evaluation.accuracy_display());
//!
//! write_predictions("predictions.csv", &outcome.evaluation.as_records())?;
//! ```
//!
//! # Numeric semantics
//!
//! Scores are natural-log sums in double precision. A value unseen for a
//! class during training contributes `ln(unseen_likelihood)` to that class's
//! score; the constant defaults to 0.01 and is configurable through
//! [`PipelineConfig`]. This is a fixed pseudo-probability substitute, not
//! additive (Laplace) smoothing.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod trainer;

// Re-exports for convenient access
pub use config::{
    ConfigValidationError, DEFAULT_UNSEEN_LIKELIHOOD, PipelineConfig, PipelineConfigBuilder,
};
pub use error::{LearningError, Result as LearningResult};
pub use evaluator::{Evaluation, Prediction, evaluate};
pub use model::NaiveBayesModel;
pub use pipeline::{Pipeline, PipelineBuilder, PipelineOutcome, PipelineSummary};
pub use report::EvaluationReport;
pub use trainer::Trainer;
