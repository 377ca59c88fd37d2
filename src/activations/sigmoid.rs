//! Logistic sigmoid activation.

use super::ActivationFunction;
use crate::initializers::{Initializer, NguyenWidrow};

/// Sigmoid activation: `1 / (1 + exp(-x))`.
///
/// Derivative uses the already-computed output: `y * (1 - y)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sigmoid;

impl ActivationFunction for Sigmoid {
    fn name(&self) -> &'static str {
        "sigmoid"
    }

    fn activate(&self, input: f64, _previous_output: f64) -> f64 {
        1.0 / (1.0 + (-input).exp())
    }

    fn derivative(&self, _input: f64, output: f64) -> f64 {
        output * (1.0 - output)
    }

    fn default_initializer(&self) -> Box<dyn Initializer> {
        Box::new(NguyenWidrow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_sigmoid_zero() {
        assert!((Sigmoid.activate(0.0, 0.0) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_sigmoid_positive() {
        let result = Sigmoid.activate(2.0, 0.0);
        assert!(result > 0.5 && result < 1.0);
    }

    #[test]
    fn test_sigmoid_negative() {
        let result = Sigmoid.activate(-2.0, 0.0);
        assert!(result > 0.0 && result < 0.5);
    }

    #[test]
    fn test_sigmoid_derivative_at_half() {
        assert!((Sigmoid.derivative(0.0, 0.5) - 0.25).abs() < EPSILON);
    }
}
