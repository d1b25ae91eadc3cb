//! Error types for the ECG analysis engine

use std::fmt;

/// Errors that can occur during ECG analysis
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Invalid input data (empty signal, shape mismatch, etc.)
    InvalidInput(String),

    /// Invalid configuration (filter band vs. sampling rate, empty lead table, etc.)
    ///
    /// Raised at filter-construction / detection-entry time, never mid-pipeline.
    InvalidConfig(String),

    /// Processing error during analysis
    ProcessingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
