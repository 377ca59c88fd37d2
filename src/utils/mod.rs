//! Shared utilities for function implementations
//!
//! This module provides the precondition checks every function runs on its
//! arguments and the random number generator used by weight initializers.

pub mod rng;
pub mod validation;

pub use rng::SimpleRng;
pub use validation::{validate_positive, validate_within_range};
