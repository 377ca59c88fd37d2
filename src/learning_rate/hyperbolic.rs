//! Hyperbolic learning rate schedule
//!
//! The reciprocal of the rate moves linearly, so the rate drops quickly at
//! first and flattens out as it nears its final value.

use tracing::debug;

use super::{validate_progress, LearningRateFunction};
use crate::error::Result;
use crate::utils::validate_positive;

/// Hyperbolic interpolation between the initial and final rates.
///
/// Formula: `rate = initial * final * N / (final * N + (initial - final) * i)`
///
/// Equivalent to interpolating `1 / rate` linearly from `1 / initial` to
/// `1 / final`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperbolicFunction {
    initial_rate: f64,
    final_rate: f64,
}

impl HyperbolicFunction {
    /// Creates a hyperbolic schedule.
    ///
    /// # Errors
    ///
    /// Both rates must be strictly positive so the denominator never reaches
    /// zero inside the valid iteration range.
    pub fn new(initial_rate: f64, final_rate: f64) -> Result<Self> {
        validate_positive(initial_rate, "initial_rate")?;
        validate_positive(final_rate, "final_rate")?;
        debug!(initial_rate, final_rate, "created hyperbolic learning rate schedule");
        Ok(Self {
            initial_rate,
            final_rate,
        })
    }
}

impl LearningRateFunction for HyperbolicFunction {
    fn name(&self) -> &'static str {
        "hyperbolic"
    }

    fn initial_rate(&self) -> f64 {
        self.initial_rate
    }

    fn final_rate(&self) -> f64 {
        self.final_rate
    }

    fn rate(&self, current_iteration: i64, total_epochs: i64) -> Result<f64> {
        validate_progress(current_iteration, total_epochs)?;

        let epochs = total_epochs as f64;
        let product = self.initial_rate * self.final_rate * epochs;
        let sum = self.final_rate * epochs
            + (self.initial_rate - self.final_rate) * current_iteration as f64;
        Ok(product / sum)
    }
}
