/*!
# Galaxy 3D Spatial

Spatial-query core for the Galaxy 3D engine: bounding volumes, frustum
culling and a quadtree index, evaluated many times per frame.

All types are plain in-memory values with no internal synchronization.
Queries are read-only and can run concurrently; mutation needs exclusive
access.

## Architecture

- **AABB / Rectangle**: axis-aligned bounds generic over the coordinate
  scalar (`f32`, `f64`, `i32`), with ray, segment, plane and sphere tests
- **FrustumPlanes**: six planes extracted from a projection matrix, with
  boolean and classifying point/sphere/box tests
- **FrustumRays**: eye point and interpolated screen-space ray directions
  from the same matrix
- **Quadtree**: dynamic 2D index with per-node capacity and
  count-or-collect range queries
- **Logging**: pluggable logger for diagnostics (node splits, rejected
  inserts, degenerate frustums, invalid construction)

Points, directions and matrices are read through small accessor traits
(`Coord2`, `Coord3`, `ColumnMatrix4`) implemented for `glam` types, arrays
and tuples.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod bounds;
pub mod culling;
pub mod spatial;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and functions, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
        // Note: spatial_* macros are NOT re-exported here - they are internal only
    }

    // Scalar and primitive-input traits
    pub mod math {
        pub use crate::math::*;
    }

    // Bounding volumes
    pub mod bounds {
        pub use crate::bounds::*;
    }

    // Frustum culling
    pub mod culling {
        pub use crate::culling::*;
    }

    // Spatial indices
    pub mod spatial {
        pub use crate::spatial::*;
    }
}

// Re-export math library at crate root
pub use glam;
