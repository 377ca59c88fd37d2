//! Linear learning rate schedule
//!
//! As training progresses the rate moves uniformly from its initial value
//! towards its final value.

use tracing::debug;

use super::{validate_progress, LearningRateFunction};
use crate::error::Result;

/// Linear interpolation between the initial and final rates.
///
/// Formula: `rate = initial + (final - initial) * i / N`
///
/// The denominator is `N`, not `N - 1`: the last valid iteration `N - 1`
/// stops one step short of `final`, which is only reached in the limit.
///
/// # Example
///
/// ```
/// use neuron_functions::learning_rate::{LearningRateFunction, LinearFunction};
///
/// let schedule = LinearFunction::new(1.0, 0.0);
/// assert_eq!(schedule.rate(0, 10).unwrap(), 1.0);
/// assert_eq!(schedule.rate(5, 10).unwrap(), 0.5);
/// assert!((schedule.rate(9, 10).unwrap() - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFunction {
    initial_rate: f64,
    final_rate: f64,
}

impl LinearFunction {
    /// Creates a linear schedule. Any pair of rates is accepted.
    pub fn new(initial_rate: f64, final_rate: f64) -> Self {
        debug!(initial_rate, final_rate, "created linear learning rate schedule");
        Self {
            initial_rate,
            final_rate,
        }
    }
}

impl LearningRateFunction for LinearFunction {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn initial_rate(&self) -> f64 {
        self.initial_rate
    }

    fn final_rate(&self) -> f64 {
        self.final_rate
    }

    fn rate(&self, current_iteration: i64, total_epochs: i64) -> Result<f64> {
        validate_progress(current_iteration, total_epochs)?;

        Ok(self.initial_rate
            + (self.final_rate - self.initial_rate) * current_iteration as f64
                / total_epochs as f64)
    }
}
