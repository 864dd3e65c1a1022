//! Configuration for the classification pipeline.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic pipeline setup.

use bayes_processing::UndefinedModePolicy;
use serde::{Deserialize, Serialize};

/// Default pseudo-probability charged for a feature value never observed for
/// a class during training.
///
/// Kept at 0.01 for score compatibility with the original tuning; override it
/// through the builder when experimenting with other pseudo-counts.
pub const DEFAULT_UNSEEN_LIKELIHOOD: f64 = 0.01;

/// Configuration for the classification pipeline.
///
/// Use [`PipelineConfig::builder()`] to create a new configuration with a
/// fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use bayes_learning::PipelineConfig;
/// use bayes_processing::UndefinedModePolicy;
///
/// let config = PipelineConfig::builder()
///     .unseen_likelihood(0.05)
///     .undefined_mode_policy(UndefinedModePolicy::LeaveMissing)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pseudo-probability substituted when a (column, class, value) entry is
    /// absent from the fitted likelihood table. Must lie in (0.0, 1.0].
    /// Default: 0.01
    pub unseen_likelihood: f64,

    /// Handling of feature columns whose values are all missing.
    /// Default: Fail
    pub undefined_mode_policy: UndefinedModePolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            unseen_likelihood: DEFAULT_UNSEEN_LIKELIHOOD,
            undefined_mode_policy: UndefinedModePolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(self.unseen_likelihood > 0.0 && self.unseen_likelihood <= 1.0) {
            return Err(ConfigValidationError::InvalidUnseenLikelihood(
                self.unseen_likelihood,
            ));
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("invalid unseen-value likelihood: {0} (must be in (0.0, 1.0])")]
    InvalidUnseenLikelihood(f64),
}

/// Builder for [`PipelineConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    unseen_likelihood: Option<f64>,
    undefined_mode_policy: Option<UndefinedModePolicy>,
}

impl PipelineConfigBuilder {
    /// Set the pseudo-probability for unseen feature values.
    ///
    /// A log-score accumulates `ln` of this value for every feature value the
    /// training data never paired with the candidate class.
    ///
    /// # Arguments
    /// * `likelihood` - Value in (0.0, 1.0]
    pub fn unseen_likelihood(mut self, likelihood: f64) -> Self {
        self.unseen_likelihood = Some(likelihood);
        self
    }

    /// Set the policy for feature columns with no observable mode.
    pub fn undefined_mode_policy(mut self, policy: UndefinedModePolicy) -> Self {
        self.undefined_mode_policy = Some(policy);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `PipelineConfig` or an error if validation fails.
    pub fn build(self) -> Result<PipelineConfig, ConfigValidationError> {
        let config = PipelineConfig {
            unseen_likelihood: self.unseen_likelihood.unwrap_or(DEFAULT_UNSEEN_LIKELIHOOD),
            undefined_mode_policy: self.undefined_mode_policy.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}
