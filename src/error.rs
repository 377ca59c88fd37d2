//! Error type for function construction and evaluation.

use thiserror::Error;

/// Errors raised by activation layers, learning-rate schedules and configuration.
///
/// Validation errors always carry the name of the offending parameter so the
/// caller can report which argument was wrong.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// Argument-domain error: the value had to be strictly positive.
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: String },

    /// Range error: the value fell outside an inclusive range.
    #[error("{name} must be within [{low}, {high}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: String,
        low: String,
        high: String,
    },

    #[error("unknown activation function '{0}'")]
    UnknownActivation(String),

    #[error("unknown learning rate schedule '{0}'")]
    UnknownSchedule(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl FunctionError {
    /// Name of the parameter that failed validation, if any.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            FunctionError::NotPositive { name, .. } | FunctionError::OutOfRange { name, .. } => {
                Some(*name)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FunctionError>;
