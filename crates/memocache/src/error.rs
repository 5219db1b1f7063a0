//! Error types for memocache

use std::fmt;

/// Result type alias for memocache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Cache constructed with an invalid capacity (must be at least 1)
    InvalidCapacity(usize),

    /// Recency list asked to peek or pop while empty
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(n) => {
                write!(f, "Invalid capacity: {} (must be at least 1)", n)
            }
            Error::Empty => write!(f, "Recency list is empty"),
        }
    }
}

impl std::error::Error for Error {}
