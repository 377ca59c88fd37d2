//! Activation layer implementation
//!
//! An ActivationLayer groups a fixed number of neurons that share one
//! activation function. Topology wiring and weight updates belong to the
//! training engine; the layer answers the per-neuron activation queries and
//! seeds its incoming weights.

use tracing::debug;

use crate::activations::{ActivationFunction, Gaussian, Linear, Logarithm, Sigmoid, Sine, Tanh};
use crate::error::Result;
use crate::initializers::Initializer;
use crate::utils::{validate_positive, SimpleRng};

/// Layer of neurons sharing one activation function.
///
/// # Fields
///
/// * `neuron_count` - Number of neurons in the layer (always positive)
/// * `function` - Activation applied by every neuron
/// * `initializer` - Weight initializer, the function's default unless overridden
///
/// # Example
///
/// ```
/// use neuron_functions::layers::ActivationLayer;
///
/// let layer = ActivationLayer::logarithm(4)?;
/// assert_eq!(layer.neuron_count(), 4);
/// assert_eq!(layer.initializer().name(), "nguyen_widrow");
/// assert_eq!(layer.derivative(3.0, layer.activate(3.0, 0.0)), 0.25);
/// # Ok::<(), neuron_functions::FunctionError>(())
/// ```
#[derive(Debug)]
pub struct ActivationLayer {
    neuron_count: usize,
    function: Box<dyn ActivationFunction>,
    initializer: Box<dyn Initializer>,
}

impl ActivationLayer {
    /// Create a new layer of `neuron_count` neurons using `function`.
    ///
    /// The layer adopts the function's default initializer.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::NotPositive`](crate::FunctionError::NotPositive)
    /// if `neuron_count` is zero.
    pub fn new(neuron_count: usize, function: Box<dyn ActivationFunction>) -> Result<Self> {
        validate_positive(neuron_count, "neuron_count")?;
        let initializer = function.default_initializer();
        debug!(
            neuron_count,
            activation = function.name(),
            initializer = initializer.name(),
            "created activation layer"
        );
        Ok(Self {
            neuron_count,
            function,
            initializer,
        })
    }

    pub fn linear(neuron_count: usize) -> Result<Self> {
        Self::new(neuron_count, Box::new(Linear))
    }

    pub fn logarithm(neuron_count: usize) -> Result<Self> {
        Self::new(neuron_count, Box::new(Logarithm))
    }

    pub fn sigmoid(neuron_count: usize) -> Result<Self> {
        Self::new(neuron_count, Box::new(Sigmoid))
    }

    pub fn tanh(neuron_count: usize) -> Result<Self> {
        Self::new(neuron_count, Box::new(Tanh))
    }

    pub fn sine(neuron_count: usize) -> Result<Self> {
        Self::new(neuron_count, Box::new(Sine))
    }

    pub fn gaussian(neuron_count: usize) -> Result<Self> {
        Self::new(neuron_count, Box::new(Gaussian))
    }

    pub fn neuron_count(&self) -> usize {
        self.neuron_count
    }

    pub fn function(&self) -> &dyn ActivationFunction {
        self.function.as_ref()
    }

    pub fn initializer(&self) -> &dyn Initializer {
        self.initializer.as_ref()
    }

    /// Replace the initializer chosen by the activation function.
    pub fn set_initializer(&mut self, initializer: Box<dyn Initializer>) {
        debug!(initializer = initializer.name(), "overriding layer initializer");
        self.initializer = initializer;
    }

    /// Activation of a single neuron; see [`ActivationFunction::activate`].
    pub fn activate(&self, input: f64, previous_output: f64) -> f64 {
        self.function.activate(input, previous_output)
    }

    /// Derivative at a single neuron; see [`ActivationFunction::derivative`].
    pub fn derivative(&self, input: f64, output: f64) -> f64 {
        self.function.derivative(input, output)
    }

    /// Seed weights and biases for this layer fed by `fan_in` source neurons.
    ///
    /// Returns `(weights, biases)` where `weights` holds `neuron_count` rows
    /// of `fan_in` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if `fan_in` is zero.
    pub fn initialize(&self, fan_in: usize, rng: &mut SimpleRng) -> Result<(Vec<f64>, Vec<f64>)> {
        validate_positive(fan_in, "fan_in")?;
        let mut weights = vec![0.0; fan_in * self.neuron_count];
        let mut biases = vec![0.0; self.neuron_count];
        self.initializer
            .initialize_weights(&mut weights, fan_in, self.neuron_count, rng)?;
        self.initializer.initialize_biases(&mut biases, fan_in, rng)?;
        Ok((weights, biases))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FunctionError;
    use crate::initializers::Zero;

    #[test]
    fn test_zero_neurons_rejected() {
        let err = ActivationLayer::logarithm(0).unwrap_err();
        assert!(matches!(
            err,
            FunctionError::NotPositive {
                name: "neuron_count",
                ..
            }
        ));
    }

    #[test]
    fn test_default_initializers() {
        let sigmoid = ActivationLayer::sigmoid(2).unwrap();
        assert_eq!(sigmoid.initializer().name(), "nguyen_widrow");

        let sine = ActivationLayer::sine(2).unwrap();
        assert_eq!(sine.initializer().name(), "random_uniform");
    }

    #[test]
    fn test_initializer_override() {
        let mut layer = ActivationLayer::tanh(3).unwrap();
        layer.set_initializer(Box::new(Zero));

        let mut rng = SimpleRng::new(5);
        let (weights, biases) = layer.initialize(2, &mut rng).unwrap();
        assert_eq!(weights, vec![0.0; 6]);
        assert_eq!(biases, vec![0.0; 3]);
    }

    #[test]
    fn test_initialize_shapes() {
        let layer = ActivationLayer::logarithm(4).unwrap();
        let mut rng = SimpleRng::new(9);
        let (weights, biases) = layer.initialize(3, &mut rng).unwrap();
        assert_eq!(weights.len(), 12);
        assert_eq!(biases.len(), 4);
    }

    #[test]
    fn test_initialize_zero_fan_in() {
        let layer = ActivationLayer::linear(1).unwrap();
        let mut rng = SimpleRng::new(9);
        assert!(layer.initialize(0, &mut rng).is_err());
    }
}
