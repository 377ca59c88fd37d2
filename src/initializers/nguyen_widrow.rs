//! Nguyen-Widrow initialization
//!
//! Spreads each neuron's active region across the input space: biases are
//! drawn from `[-beta, beta]` and every neuron's incoming weight vector is
//! rescaled to length `beta`, where `beta = 0.7 * neuron_count^(1 / fan_in)`.

use super::{validate_shape, Initializer};
use crate::error::Result;
use crate::utils::{validate_positive, SimpleRng};

/// Nguyen-Widrow variance-scaling initializer.
///
/// Keeps pre-activation inputs concentrated where saturating activations
/// still have a large gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NguyenWidrow;

impl NguyenWidrow {
    /// Scaling factor `0.7 * neuron_count^(1 / fan_in)`.
    pub fn factor(fan_in: usize, neuron_count: usize) -> f64 {
        0.7 * (neuron_count as f64).powf(1.0 / fan_in as f64)
    }
}

impl Initializer for NguyenWidrow {
    fn name(&self) -> &'static str {
        "nguyen_widrow"
    }

    fn initialize_biases(
        &self,
        biases: &mut [f64],
        fan_in: usize,
        rng: &mut SimpleRng,
    ) -> Result<()> {
        validate_positive(fan_in, "fan_in")?;
        let beta = Self::factor(fan_in, biases.len());
        for bias in biases.iter_mut() {
            *bias = rng.gen_range_f64(-beta, beta);
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
        let beta = Self::factor(fan_in, neuron_count);

        for row in weights.chunks_exact_mut(fan_in) {
            let mut norm = 0.0;
            for weight in row.iter_mut() {
                *weight = rng.gen_range_f64(-0.5, 0.5);
                norm += *weight * *weight;
            }
            let norm = norm.sqrt();
            // An all-zero draw cannot be rescaled; leave it as is.
            if norm > 0.0 {
                let scale = beta / norm;
                for weight in row.iter_mut() {
                    *weight *= scale;
                }
            }
        }
        Ok(())
    }
}
