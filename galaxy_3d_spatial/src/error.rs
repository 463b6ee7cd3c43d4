//! Error types for Galaxy3D spatial queries
//!
//! Only caller programming errors are reported through this type.
//! Expected "no result" outcomes (empty intersection, ray miss, rejected
//! quadtree insert) are plain values and never go through `Error`.

use std::fmt;

/// Result type for Galaxy3D spatial operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D spatial errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Axis index outside `{0, 1, 2}`
    ComponentOutOfRange(usize),

    /// Node capacity must be at least 1
    InvalidCapacity(usize),

    /// Bounds rectangle/box is not usable (NaN, empty or inverted)
    InvalidBounds(String),
}

impl Error {
    /// Log the error through the crate logger and hand it back.
    ///
    /// Every constructor site goes through here so that argument errors
    /// show up in the log with file:line.
    pub(crate) fn logged(self) -> Self {
        crate::spatial_error!("galaxy3d::spatial", "{}", self);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ComponentOutOfRange(component) => {
                write!(f, "Component index out of range: {} (expected 0, 1 or 2)", component)
            }
            Error::InvalidCapacity(capacity) => {
                write!(f, "Invalid capacity: {} (must be greater than 0)", capacity)
            }
            Error::InvalidBounds(msg) => write!(f, "Invalid bounds: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
