//! Bounds module: axis-aligned boxes and rectangles.
//!
//! Plain value types generic over the coordinate scalar. Empty or
//! non-overlapping results are expressed through sentinel values, never
//! through errors.

mod aabb;
mod rectangle;
pub mod intersection;

pub use aabb::{AABB, AABBf, AABBd, AABBi};
pub use rectangle::{Rectangle, Rectanglef, Rectangled, Rectanglei};
pub use intersection::LineSegmentHit;
