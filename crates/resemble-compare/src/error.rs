//! Error types for resemble-compare

use thiserror::Error;

/// Errors that can occur while comparing two rasters
#[derive(Debug, Error)]
pub enum CompareError {
    /// Core library error (e.g. the output frame could not be allocated)
    #[error("core error: {0}")]
    Core(#[from] resemble_core::Error),

    /// An unknown error visualization style name
    #[error("unknown error style: {0}")]
    UnknownErrorStyle(String),
}

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;
