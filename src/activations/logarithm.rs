//! Symmetric logarithm activation.

use super::ActivationFunction;
use crate::initializers::{Initializer, NguyenWidrow};

/// `ln(1 + x)` for positive inputs and `-ln(1 - x)` otherwise.
///
/// An odd, unbounded squashing function defined on the whole real line. Its
/// derivative `1 / (1 + |x|)` is largest at zero and decays slowly, so the
/// layer defaults to Nguyen-Widrow initialization.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Logarithm;

impl ActivationFunction for Logarithm {
    fn name(&self) -> &'static str {
        "logarithm"
    }

    fn activate(&self, input: f64, _previous_output: f64) -> f64 {
        if input > 0.0 {
            input.ln_1p()
        } else {
            -(-input).ln_1p()
        }
    }

    fn derivative(&self, input: f64, _output: f64) -> f64 {
        1.0 / (1.0 + input.abs())
    }

    fn default_initializer(&self) -> Box<dyn Initializer> {
        Box::new(NguyenWidrow)
    }
}
