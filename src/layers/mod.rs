//! Layer abstractions for neural networks
//!
//! This module provides the ActivationLayer, which owns the activation
//! function applied to every neuron of a layer together with the initializer
//! used to seed that layer's weights.

pub mod activation;

pub use activation::ActivationLayer;
