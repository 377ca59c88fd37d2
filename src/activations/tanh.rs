//! Hyperbolic tangent activation.

use super::ActivationFunction;
use crate::initializers::{Initializer, NguyenWidrow};

/// `tanh(x)`, with derivative `1 - y^2` taken from the output.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tanh;

impl ActivationFunction for Tanh {
    fn name(&self) -> &'static str {
        "tanh"
    }

    fn activate(&self, input: f64, _previous_output: f64) -> f64 {
        input.tanh()
    }

    fn derivative(&self, _input: f64, output: f64) -> f64 {
        1.0 - output * output
    }

    fn default_initializer(&self) -> Box<dyn Initializer> {
        Box::new(NguyenWidrow)
    }
}
