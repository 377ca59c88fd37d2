//! Uniform random and zero initializers.

use super::{validate_shape, Initializer};
use crate::error::Result;
use crate::utils::{validate_positive, SimpleRng};

/// Draws every weight and bias uniformly from `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomUniform {
    pub min: f64,
    pub max: f64,
}

impl RandomUniform {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for RandomUniform {
    fn default() -> Self {
        Self::new(-0.5, 0.5)
    }
}

impl Initializer for RandomUniform {
    fn name(&self) -> &'static str {
        "random_uniform"
    }

    fn initialize_biases(
        &self,
        biases: &mut [f64],
        fan_in: usize,
        rng: &mut SimpleRng,
    ) -> Result<()> {
        validate_positive(fan_in, "fan_in")?;
        for bias in biases.iter_mut() {
            *bias = rng.gen_range_f64(self.min, self.max);
        }
        Ok(())
    }

    fn initialize_weights(
        &self,
        weights: &mut [f64],
        fan_in: usize,
        neuron_count: usize,
        rng: &mut SimpleRng,
    ) -> Result<()> {
        validate_shape(weights, fan_in, neuron_count)?;
        for weight in weights.iter_mut() {
            *weight = rng.gen_range_f64(self.min, self.max);
        }
        Ok(())
    }
}

/// Sets every weight and bias to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Zero;

impl Initializer for Zero {
    fn name(&self) -> &'static str {
        "zero"
    }

    fn initialize_biases(&self, biases: &mut [f64], fan_in: usize, _: &mut SimpleRng) -> Result<()> {
        validate_positive(fan_in, "fan_in")?;
        biases.fill(0.0);
        Ok(())
    }

    fn initialize_weights(
        &self,
        weights: &mut [f64],
        fan_in: usize,
        neuron_count: usize,
        _: &mut SimpleRng,
    ) -> Result<()> {
        validate_shape(weights, fan_in, neuron_count)?;
        weights.fill(0.0);
        Ok(())
    }
}
