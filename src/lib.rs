//! Neuron Functions Library
//!
//! This library provides the parameterized numeric strategies a neural-network
//! training engine calls into: per-neuron activation functions with their
//! derivatives, per-epoch learning-rate schedules, and the weight initializers
//! an activation layer recommends.
//!
//! # Modules
//!
//! - `activations`: ActivationFunction trait and formulas (Logarithm, Sigmoid, etc.)
//! - `learning_rate`: LearningRateFunction trait and schedules (Linear, Exponential, etc.)
//! - `initializers`: Initializer trait and implementations (Nguyen-Widrow, random, zero)
//! - `layers`: ActivationLayer owning one activation function per layer
//! - `utils`: Argument validation and deterministic RNG
//! - `config`: JSON configuration selecting functions by name
//! - `error`: Error type shared by every function

pub mod activations;
pub mod config;
pub mod error;
pub mod initializers;
pub mod layers;
pub mod learning_rate;
pub mod utils;

pub use error::{FunctionError, Result};
