//! Weight initializers for activation layers
//!
//! Every activation function recommends a default initializer that its layer
//! applies unless the caller overrides it. Initializers fill a layer's bias
//! vector and its incoming weight matrix (row-major, one row of `fan_in`
//! weights per neuron).

pub mod nguyen_widrow;
pub mod random;

pub use nguyen_widrow::NguyenWidrow;
pub use random::{RandomUniform, Zero};

use std::fmt::Debug;

use crate::error::Result;
use crate::utils::SimpleRng;

/// Strategy for assigning initial weights and biases to a layer.
pub trait Initializer: Send + Sync + Debug {
    /// Short identifier, e.g. `"nguyen_widrow"`.
    fn name(&self) -> &'static str;

    /// Fill `biases` (one per neuron) for a layer fed by `fan_in` inputs.
    fn initialize_biases(&self, biases: &mut [f64], fan_in: usize, rng: &mut SimpleRng)
        -> Result<()>;

    /// Fill `weights`, laid out as `neuron_count` rows of `fan_in` weights.
    ///
    /// # Errors
    ///
    /// Returns an error if `fan_in` or `neuron_count` is zero, or if
    /// `weights.len() != fan_in * neuron_count`.
    fn initialize_weights(
        &self,
        weights: &mut [f64],
        fan_in: usize,
        neuron_count: usize,
        rng: &mut SimpleRng,
    ) -> Result<()>;
}

/// Shared shape check for weight matrices.
pub(crate) fn validate_shape(weights: &[f64], fan_in: usize, neuron_count: usize) -> Result<()> {
    crate::utils::validate_positive(fan_in, "fan_in")?;
    crate::utils::validate_positive(neuron_count, "neuron_count")?;
    let expected = fan_in * neuron_count;
    crate::utils::validate_within_range(weights.len(), expected, expected, "weights.len")
}
