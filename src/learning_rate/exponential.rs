//! Exponential learning rate schedule
//!
//! The rate changes by a constant ratio each iteration, moving geometrically
//! from its initial value towards its final value.

use tracing::debug;

use super::{validate_progress, LearningRateFunction};
use crate::error::Result;
use crate::utils::validate_positive;

/// Geometric interpolation between the initial and final rates.
///
/// Formula: `rate = initial * (final / initial)^(i / N)`
///
/// # Example
///
/// ```
/// use neuron_functions::learning_rate::{ExponentialFunction, LearningRateFunction};
///
/// let schedule = ExponentialFunction::new(0.1, 0.001)?;
/// assert!((schedule.rate(5, 10)? - 0.01).abs() < 1e-12);
/// # Ok::<(), neuron_functions::FunctionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFunction {
    initial_rate: f64,
    final_rate: f64,
}

impl ExponentialFunction {
    /// Creates an exponential schedule.
    ///
    /// # Errors
    ///
    /// Both rates must be strictly positive, since the ratio between them is
    /// raised to fractional powers.
    pub fn new(initial_rate: f64, final_rate: f64) -> Result<Self> {
        validate_positive(initial_rate, "initial_rate")?;
        validate_positive(final_rate, "final_rate")?;
        debug!(initial_rate, final_rate, "created exponential learning rate schedule");
        Ok(Self {
            initial_rate,
            final_rate,
        })
    }
}

impl LearningRateFunction for ExponentialFunction {
    fn name(&self) -> &'static str {
        "exponential"
    }

    fn initial_rate(&self) -> f64 {
        self.initial_rate
    }

    fn final_rate(&self) -> f64 {
        self.final_rate
    }

    fn rate(&self, current_iteration: i64, total_epochs: i64) -> Result<f64> {
        validate_progress(current_iteration, total_epochs)?;

        let progress = current_iteration as f64 / total_epochs as f64;
        Ok(self.initial_rate * (self.final_rate / self.initial_rate).powf(progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_rejects_non_positive_rates() {
        assert!(ExponentialFunction::new(0.0, 0.1).is_err());
        assert!(ExponentialFunction::new(0.1, -0.1).is_err());
    }
}
