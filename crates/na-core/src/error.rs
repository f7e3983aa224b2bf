//! Error types for na-stats
//!
//! The reductions and transforms themselves never fail: a missing value is a
//! result, not an error. Errors only arise at the edges, when writing into a
//! caller-owned buffer or parsing configuration.

use thiserror::Error;

/// Core error type for na-stats
#[derive(Error, Debug)]
pub enum Error {
    /// Output buffer does not match the input length
    #[error("Length mismatch: input has {input} elements, output has room for {output}")]
    LengthMismatch { input: usize, output: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an output buffer of the wrong size
    pub fn length_mismatch(input: usize, output: usize) -> Self {
        Self::LengthMismatch { input, output }
    }
}
