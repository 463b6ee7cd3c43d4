//! Math primitives consumed by the spatial-query core.
//!
//! The core does not own a vector or matrix library. It reads coordinates
//! through the small accessor traits defined here, implemented for glam
//! types, plain arrays and tuples.

mod scalar;
mod coords;

pub use scalar::{Scalar, Real};
pub use coords::{Coord2, Coord3, ColumnMatrix4, Interval};

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
