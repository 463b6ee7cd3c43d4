//! Culling module: frustum plane extraction and visibility tests.
//!
//! The frustum is a passive data container: the caller computes the
//! view-projection matrix, calls `set()` once per frame, and then runs
//! any number of read-only tests against it. `FrustumRays` derives the
//! eye point and per-pixel ray directions from the same matrix.

mod frustum;
mod frustum_rays;

pub use frustum::{
    FrustumPlanes, FrustumPlane, PlaneMask, Plane,
    SphereTest, AabTest,
};
pub use frustum_rays::FrustumRays;
