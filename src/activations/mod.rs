//! Activation functions for neural network layers
//!
//! This module provides the ActivationFunction trait and one implementation per
//! formula:
//! - Linear (identity)
//! - Logarithm (symmetric log squashing)
//! - Sigmoid
//! - Tanh
//! - Sine
//! - Gaussian
//!
//! New formulas are added by implementing the trait; callers only ever hold a
//! `Box<dyn ActivationFunction>`.

mod r#trait;
pub mod gaussian;
pub mod linear;
pub mod logarithm;
pub mod sigmoid;
pub mod sine;
pub mod tanh;

pub use gaussian::Gaussian;
pub use linear::Linear;
pub use logarithm::Logarithm;
pub use r#trait::ActivationFunction;
pub use sigmoid::Sigmoid;
pub use sine::Sine;
pub use tanh::Tanh;

use crate::error::{FunctionError, Result};

/// Names accepted by [`from_name`].
pub const ACTIVATION_NAMES: [&str; 6] = ["linear", "logarithm", "sigmoid", "tanh", "sine", "gaussian"];

/// Looks up an activation function by its configuration name.
///
/// # Errors
///
/// Returns [`FunctionError::UnknownActivation`] for names not listed in
/// [`ACTIVATION_NAMES`].
pub fn from_name(name: &str) -> Result<Box<dyn ActivationFunction>> {
    let function: Box<dyn ActivationFunction> = match name {
        "linear" => Box::new(Linear),
        "logarithm" => Box::new(Logarithm),
        "sigmoid" => Box::new(Sigmoid),
        "tanh" => Box::new(Tanh),
        "sine" => Box::new(Sine),
        "gaussian" => Box::new(Gaussian),
        other => return Err(FunctionError::UnknownActivation(other.to_string())),
    };
    Ok(function)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_names() {
        for name in ACTIVATION_NAMES {
            assert_eq!(from_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert!(matches!(
            from_name("relu"),
            Err(FunctionError::UnknownActivation(name)) if name == "relu"
        ));
    }
}
