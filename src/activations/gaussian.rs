//! Gaussian (radial) activation.

use super::ActivationFunction;
use crate::initializers::{Initializer, RandomUniform};

/// `exp(-x^2)`, peaking at 1 for zero input.
///
/// Derivative `-2 * x * y` reuses the output.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gaussian;

impl ActivationFunction for Gaussian {
    fn name(&self) -> &'static str {
        "gaussian"
    }

    fn activate(&self, input: f64, _previous_output: f64) -> f64 {
        (-input * input).exp()
    }

    fn derivative(&self, input: f64, output: f64) -> f64 {
        -2.0 * input * output
    }

    fn default_initializer(&self) -> Box<dyn Initializer> {
        Box::new(RandomUniform::default())
    }
}
