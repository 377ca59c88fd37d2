//! Sine activation.

use super::ActivationFunction;
use crate::initializers::{Initializer, RandomUniform};

/// `sin(x)`, with derivative `cos(x)`.
///
/// Periodic, so Nguyen-Widrow's region spreading does not apply; the layer
/// defaults to small uniform weights in `[-0.5, 0.5)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sine;

impl ActivationFunction for Sine {
    fn name(&self) -> &'static str {
        "sine"
    }

    fn activate(&self, input: f64, _previous_output: f64) -> f64 {
        input.sin()
    }

    fn derivative(&self, input: f64, _output: f64) -> f64 {
        input.cos()
    }

    fn default_initializer(&self) -> Box<dyn Initializer> {
        Box::new(RandomUniform::default())
    }
}
