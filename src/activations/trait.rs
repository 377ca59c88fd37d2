//! ActivationFunction trait definition
//!
//! This module defines the contract every activation formula implements: a
//! forward query, its derivative, and the weight initializer the formula
//! recommends for the layer that owns it.

use std::fmt::Debug;

use crate::initializers::Initializer;

/// Core trait for per-neuron activation functions.
///
/// Implementations hold no mutable state, so one instance can serve every
/// neuron of a layer and be called from several threads at once.
///
/// # Example
///
/// ```
/// use neuron_functions::activations::{ActivationFunction, Logarithm};
///
/// let f = Logarithm;
/// let y = f.activate(3.0, 0.0);
/// assert!((y - 4.0_f64.ln()).abs() < 1e-12);
/// assert_eq!(f.derivative(3.0, y), 0.25);
/// ```
pub trait ActivationFunction: Send + Sync + Debug {
    /// Short identifier, e.g. `"logarithm"`.
    fn name(&self) -> &'static str;

    /// Post-activation value for a neuron.
    ///
    /// # Arguments
    ///
    /// * `input` - Weighted input sum reaching the neuron
    /// * `previous_output` - Output of the neuron on the previous step; only
    ///   stateful formulas use it
    ///
    /// Defined for every finite input. NaN and infinities propagate.
    fn activate(&self, input: f64, previous_output: f64) -> f64;

    /// Derivative of the activation evaluated at `input`.
    ///
    /// # Arguments
    ///
    /// * `input` - Weighted input sum reaching the neuron
    /// * `output` - Value previously returned by [`activate`](Self::activate)
    ///   for that input; formulas expressed in terms of their output use it
    ///   instead of recomputing
    fn derivative(&self, input: f64, output: f64) -> f64;

    /// Initializer the owning layer applies unless the caller overrides it.
    fn default_initializer(&self) -> Box<dyn Initializer>;
}
