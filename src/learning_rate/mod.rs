//! Learning rate schedules
//!
//! This module defines the LearningRateFunction trait for scaling weight
//! updates over the course of training. Each schedule is configured once with
//! an initial and a final rate and is then queried once per epoch with the
//! current iteration and the total epoch count.
//!
//! # Example
//!
//! ```
//! use neuron_functions::learning_rate::{LearningRateFunction, LinearFunction};
//!
//! let schedule = LinearFunction::new(1.0, 0.0);
//! for epoch in 0..10 {
//!     let rate = schedule.rate(epoch, 10)?;
//!     // ... scale this epoch's weight deltas by `rate` ...
//!     assert!(rate > 0.0);
//! }
//! # Ok::<(), neuron_functions::FunctionError>(())
//! ```

pub mod exponential;
pub mod hyperbolic;
pub mod linear;

pub use exponential::ExponentialFunction;
pub use hyperbolic::HyperbolicFunction;
pub use linear::LinearFunction;

use std::fmt::Debug;

use crate::error::{FunctionError, Result};
use crate::utils::{validate_positive, validate_within_range};

/// Core trait for learning rate schedules.
///
/// Schedules carry only their immutable initial and final rates; all training
/// progress is passed in on each call, so one instance can be shared freely.
pub trait LearningRateFunction: Send + Sync + Debug {
    /// Short identifier, e.g. `"linear"`.
    fn name(&self) -> &'static str;

    /// Rate returned for the first iteration.
    fn initial_rate(&self) -> f64;

    /// Rate the schedule approaches as training completes.
    fn final_rate(&self) -> f64;

    /// Effective learning rate for `current_iteration` out of `total_epochs`.
    ///
    /// # Errors
    ///
    /// * [`FunctionError::NotPositive`] if `total_epochs <= 0`
    /// * [`FunctionError::OutOfRange`] if `current_iteration` is not in
    ///   `[0, total_epochs - 1]`
    fn rate(&self, current_iteration: i64, total_epochs: i64) -> Result<f64>;
}

/// Precondition shared by every schedule, checked before any arithmetic.
pub(crate) fn validate_progress(current_iteration: i64, total_epochs: i64) -> Result<()> {
    validate_positive(total_epochs, "total_epochs")?;
    validate_within_range(current_iteration, 0, total_epochs - 1, "current_iteration")
}

/// Names accepted by [`from_name`].
pub const SCHEDULE_NAMES: [&str; 3] = ["linear", "exponential", "hyperbolic"];

/// Builds a schedule by its configuration name.
///
/// # Errors
///
/// Returns [`FunctionError::UnknownSchedule`] for unknown names, or the
/// schedule's own construction error.
pub fn from_name(
    name: &str,
    initial_rate: f64,
    final_rate: f64,
) -> Result<Box<dyn LearningRateFunction>> {
    let schedule: Box<dyn LearningRateFunction> = match name {
        "linear" => Box::new(LinearFunction::new(initial_rate, final_rate)),
        "exponential" => Box::new(ExponentialFunction::new(initial_rate, final_rate)?),
        "hyperbolic" => Box::new(HyperbolicFunction::new(initial_rate, final_rate)?),
        other => return Err(FunctionError::UnknownSchedule(other.to_string())),
    };
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_progress_bounds() {
        assert!(validate_progress(0, 1).is_ok());
        assert!(validate_progress(9, 10).is_ok());
        assert!(validate_progress(10, 10).is_err());
        assert!(validate_progress(0, 0).is_err());
    }

    #[test]
    fn test_epochs_checked_before_iteration() {
        let err = validate_progress(-1, 0).unwrap_err();
        assert_eq!(err.parameter(), Some("total_epochs"));
    }

    #[test]
    fn test_from_name() {
        for name in SCHEDULE_NAMES {
            assert_eq!(from_name(name, 0.5, 0.1).unwrap().name(), name);
        }
        assert!(matches!(
            from_name("cosine", 0.5, 0.1),
            Err(FunctionError::UnknownSchedule(_))
        ));
    }
}
