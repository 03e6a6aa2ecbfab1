//! Error types for the price estimation engine

use std::fmt;

/// Errors that can occur during price estimation
#[derive(Debug, Clone)]
pub enum EstimateError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Record parsing error (batch input files)
    RecordError(String),

    /// Model artifact loading or inference error
    ModelError(String),

    /// Processing error during estimation
    ProcessingError(String),

    /// Numerical error (overflow, non-finite result, etc.)
    NumericalError(String),
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            EstimateError::RecordError(msg) => write!(f, "Record error: {}", msg),
            EstimateError::ModelError(msg) => write!(f, "Model error: {}", msg),
            EstimateError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            EstimateError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for EstimateError {}
