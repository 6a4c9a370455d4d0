//! Error types for univar

use thiserror::Error;

/// Result type alias using univar's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in univar operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Inner dimensions do not agree for a matrix product
    #[error("dimension mismatch: cannot multiply {lhs:?} by {rhs:?}")]
    DimensionMismatch {
        /// Shape of the left operand as (rows, columns)
        lhs: (usize, usize),
        /// Shape of the right operand as (rows, columns)
        rhs: (usize, usize),
    },

    /// A polynomial term could not be parsed
    #[error("invalid polynomial term {token:?}")]
    Parse {
        /// The offending source fragment
        token: String,
    },
}

impl Error {
    /// Create a dimension mismatch error from two operand shapes
    pub fn dimension_mismatch(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch { lhs, rhs }
    }
}
