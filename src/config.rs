//! Configuration structures for function selection
//!
//! This module parses the JSON configuration that picks an activation
//! function and a learning rate schedule by name, and builds them as trait
//! objects so the training engine never names a concrete formula.

use serde::Deserialize;
use tracing::debug;

use crate::activations::{self, ACTIVATION_NAMES};
use crate::error::{FunctionError, Result};
use crate::layers::ActivationLayer;
use crate::learning_rate::{self, LearningRateFunction, SCHEDULE_NAMES};
use crate::utils::validate_positive;

/// Layer and schedule selection for a training session.
///
/// # Example
///
/// ```json
/// {
///   "activation": "logarithm",
///   "neuron_count": 8,
///   "learning_rate": {
///     "schedule": "linear",
///     "initial_rate": 0.3,
///     "final_rate": 0.05
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionConfig {
    /// Activation name: "linear", "logarithm", "sigmoid", "tanh", "sine" or "gaussian"
    pub activation: String,

    /// Number of neurons in the layer using the activation
    pub neuron_count: usize,

    pub learning_rate: LearningRateConfig,
}

/// Learning rate schedule selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LearningRateConfig {
    /// Schedule name: "linear", "exponential" or "hyperbolic"
    pub schedule: String,

    pub initial_rate: f64,

    pub final_rate: f64,
}

impl FunctionConfig {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::Config`] for malformed JSON, an unknown-name
    /// error for unrecognised activation or schedule names, and
    /// [`FunctionError::NotPositive`] for a zero neuron count.
    ///
    /// # Examples
    ///
    /// ```
    /// use neuron_functions::config::FunctionConfig;
    ///
    /// let config = FunctionConfig::from_json(
    ///     r#"{"activation": "sigmoid", "neuron_count": 2,
    ///         "learning_rate": {"schedule": "linear", "initial_rate": 1.0, "final_rate": 0.0}}"#,
    /// )?;
    /// assert_eq!(config.build_schedule()?.rate(5, 10)?, 0.5);
    /// # Ok::<(), neuron_functions::FunctionError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FunctionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !ACTIVATION_NAMES.contains(&self.activation.as_str()) {
            return Err(FunctionError::UnknownActivation(self.activation.clone()));
        }
        if !SCHEDULE_NAMES.contains(&self.learning_rate.schedule.as_str()) {
            return Err(FunctionError::UnknownSchedule(
                self.learning_rate.schedule.clone(),
            ));
        }
        validate_positive(self.neuron_count, "neuron_count")
    }

    /// Builds the configured activation layer.
    pub fn build_layer(&self) -> Result<ActivationLayer> {
        debug!(activation = %self.activation, "building layer from config");
        let function = activations::from_name(&self.activation)?;
        ActivationLayer::new(self.neuron_count, function)
    }

    /// Builds the configured learning rate schedule.
    pub fn build_schedule(&self) -> Result<Box<dyn LearningRateFunction>> {
        let lr = &self.learning_rate;
        debug!(schedule = %lr.schedule, "building schedule from config");
        learning_rate::from_name(&lr.schedule, lr.initial_rate, lr.final_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "activation": "logarithm",
        "neuron_count": 8,
        "learning_rate": {"schedule": "exponential", "initial_rate": 0.3, "final_rate": 0.05}
    }"#;

    #[test]
    fn test_parse_valid() {
        let config = FunctionConfig::from_json(VALID).unwrap();
        assert_eq!(config.activation, "logarithm");
        assert_eq!(config.neuron_count, 8);
        assert_eq!(config.learning_rate.schedule, "exponential");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{"activation": "linear", "neuron_count": 1, "gamma": 0.5,
            "learning_rate": {"schedule": "linear", "initial_rate": 0.1, "final_rate": 0.1}}"#;
        assert!(matches!(
            FunctionConfig::from_json(json),
            Err(FunctionError::Config(_))
        ));
    }
}
