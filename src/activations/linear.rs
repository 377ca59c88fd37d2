//! Identity activation.

use super::ActivationFunction;
use crate::initializers::{Initializer, NguyenWidrow};

/// Passes the input through unchanged; derivative is constant `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Linear;

impl ActivationFunction for Linear {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn activate(&self, input: f64, _previous_output: f64) -> f64 {
        input
    }

    fn derivative(&self, _input: f64, _output: f64) -> f64 {
        1.0
    }

    fn default_initializer(&self) -> Box<dyn Initializer> {
        Box::new(NguyenWidrow)
    }
}
