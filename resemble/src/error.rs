//! Error types for the resemble facade

use resemble_compare::CompareError;
use resemble_io::IoError;
use std::fmt;
use thiserror::Error;

/// Which input of a comparison a load error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// A source raster could not be read or decoded
#[derive(Debug, Error)]
#[error("failed to load {side} image: {source}")]
pub struct LoadError {
    pub side: Side,
    #[source]
    pub source: IoError,
}

/// Errors returned by the facade operations
#[derive(Debug, Error)]
pub enum Error {
    /// An input failed to load; no analysis was run
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The comparison itself failed
    #[error("comparison error: {0}")]
    Compare(#[from] CompareError),

    /// A single image could not be read for analysis, or a diff image could
    /// not be written
    #[error("image I/O error: {0}")]
    Io(#[from] IoError),
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, Error>;
