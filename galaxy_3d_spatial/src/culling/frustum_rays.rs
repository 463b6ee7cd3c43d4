/// FrustumRays: eye position and per-pixel ray directions of a frustum.
///
/// Built from the same projection or view-projection matrix as
/// `FrustumPlanes`. The four side planes are intersected pairwise into the
/// corner edge directions, and three of them are intersected into the eye
/// point. `dir(x, y)` then interpolates between the corner directions,
/// which is how a ray tracer or a picking pass turns a normalized screen
/// position into a world-space ray.

use crate::math::{ColumnMatrix4, Real};

type Vec3<S> = [S; 3];

fn cross<S: Real>(a: Vec3<S>, b: Vec3<S>) -> Vec3<S> {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot<S: Real>(a: Vec3<S>, b: Vec3<S>) -> S {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn lerp<S: Real>(a: Vec3<S>, b: Vec3<S>, t: S) -> Vec3<S> {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Eye point and corner ray directions of a frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumRays<S: Real = f32> {
    /// -x, -y corner direction (bottom left)
    nxny: Vec3<S>,
    /// +x, -y corner direction (bottom right)
    pxny: Vec3<S>,
    /// -x, +y corner direction (top left)
    nxpy: Vec3<S>,
    /// +x, +y corner direction (top right)
    pxpy: Vec3<S>,
    /// Eye point
    origin: Vec3<S>,
}

impl<S: Real> Default for FrustumRays<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Real> FrustumRays<S> {
    /// All zero. Call `set()` before use.
    pub fn new() -> Self {
        let zero = [S::zero(); 3];
        Self {
            nxny: zero,
            pxny: zero,
            nxpy: zero,
            pxpy: zero,
            origin: zero,
        }
    }

    pub fn from_matrix(m: &impl ColumnMatrix4<S>) -> Self {
        let mut rays = Self::new();
        rays.set(m);
        rays
    }

    /// Recompute the eye point and corner directions from `m`.
    ///
    /// Side planes are taken unnormalized (fourth row plus or minus the
    /// first two rows). An orthographic matrix has parallel side planes and
    /// no eye point; its origin comes out non-finite.
    pub fn set(&mut self, m: &impl ColumnMatrix4<S>) -> &mut Self {
        let c = m.cols();
        // (a, b, c) and d of row3 +/- row r
        let normal = |r: usize, sign: S| {
            [
                c[0][3] + sign * c[0][r],
                c[1][3] + sign * c[1][r],
                c[2][3] + sign * c[2][r],
            ]
        };
        let offset = |r: usize, sign: S| c[3][3] + sign * c[3][r];
        let (plus, minus) = (S::one(), -S::one());

        let nx = normal(0, plus);
        let px = normal(0, minus);
        let ny = normal(1, plus);
        let py = normal(1, minus);
        let (d_nx, d_px, d_py) = (offset(0, plus), offset(0, minus), offset(1, minus));

        self.nxny = cross(ny, nx);
        self.pxny = cross(px, ny);
        self.nxpy = cross(nx, py);
        self.pxpy = cross(py, px);

        // eye = intersection of the nx, px and py planes
        let pxnx = cross(px, nx);
        let denom = dot(nx, self.pxpy);
        if denom == S::zero() {
            crate::spatial_warn!(
                "galaxy3d::FrustumRays",
                "Side planes do not meet in a point (parallel projection?)"
            );
        }
        let inv = S::one() / denom;
        self.origin = std::array::from_fn(|i| {
            (-self.pxpy[i] * d_nx - self.nxpy[i] * d_px - pxnx[i] * d_py) * inv
        });
        self
    }

    /// Eye point of the frustum.
    pub fn origin(&self) -> [S; 3] {
        self.origin
    }

    /// Normalized ray direction through the normalized screen position
    /// `(x, y)`: `(0, 0)` is the bottom-left corner, `(1, 1)` the top-right.
    pub fn dir(&self, x: S, y: S) -> [S; 3] {
        let left = lerp(self.nxny, self.nxpy, y);
        let right = lerp(self.pxny, self.pxpy, y);
        let d = lerp(left, right, x);
        let inv_len = S::one() / dot(d, d).sqrt();
        [d[0] * inv_len, d[1] * inv_len, d[2] * inv_len]
    }
}

#[cfg(test)]
#[path = "frustum_rays_tests.rs"]
mod tests;
