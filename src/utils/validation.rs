//! Argument validation shared by every function
//!
//! Activation layers, learning-rate schedules and initializers check their
//! arguments through these two helpers so every function reports the same
//! error kinds with the same wording.

use std::fmt::Display;

use tracing::trace;

use crate::error::{FunctionError, Result};

/// Fails with [`FunctionError::NotPositive`] unless `value > 0`.
///
/// Works for any numeric type whose `Default` is zero. NaN is rejected since
/// it is not greater than zero.
///
/// # Examples
///
/// ```
/// use neuron_functions::utils::validate_positive;
///
/// assert!(validate_positive(3, "total_epochs").is_ok());
/// assert!(validate_positive(0, "total_epochs").is_err());
/// assert!(validate_positive(-0.5, "initial_rate").is_err());
/// ```
pub fn validate_positive<T>(value: T, name: &'static str) -> Result<()>
where
    T: PartialOrd + Default + Display,
{
    if value > T::default() {
        return Ok(());
    }
    trace!(parameter = name, %value, "rejected non-positive argument");
    Err(FunctionError::NotPositive {
        name,
        value: value.to_string(),
    })
}

/// Fails with [`FunctionError::OutOfRange`] unless `low <= value <= high`.
///
/// # Examples
///
/// ```
/// use neuron_functions::utils::validate_within_range;
///
/// assert!(validate_within_range(9, 0, 9, "current_iteration").is_ok());
/// assert!(validate_within_range(10, 0, 9, "current_iteration").is_err());
/// ```
pub fn validate_within_range<T>(value: T, low: T, high: T, name: &'static str) -> Result<()>
where
    T: PartialOrd + Display,
{
    if value >= low && value <= high {
        return Ok(());
    }
    trace!(parameter = name, %value, %low, %high, "rejected out-of-range argument");
    Err(FunctionError::OutOfRange {
        name,
        value: value.to_string(),
        low: low.to_string(),
        high: high.to_string(),
    })
}
