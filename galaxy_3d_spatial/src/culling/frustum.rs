/// FrustumPlanes: six clipping planes for visibility culling.
///
/// Each plane is stored as (A, B, C, D) where:
/// - (A, B, C) is the unit inward-pointing normal
/// - D is the signed distance term
/// - A point P is inside the plane if A*x + B*y + C*z + D >= 0
///
/// One component provides both the boolean tests (`test_*`) and the
/// classifying tests (`intersect_*`, `cull_*`). Planes are always tested in
/// the fixed order NegX, PosX, NegY, PosY, NegZ, PosZ, so "the plane that
/// culled the box" is the first rejecting plane in that order.

use std::fmt;
use bitflags::bitflags;
use crate::bounds::AABB;
use crate::math::{ColumnMatrix4, Coord3, Real};

/// Identifies one of the six frustum planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FrustumPlane {
    /// x = -1 in clip space (left)
    NegX = 0,
    /// x = +1 in clip space (right)
    PosX = 1,
    /// y = -1 in clip space (bottom)
    NegY = 2,
    /// y = +1 in clip space (top)
    PosY = 3,
    /// z = -1 in clip space (near)
    NegZ = 4,
    /// z = +1 in clip space (far)
    PosZ = 5,
}

impl FrustumPlane {
    /// All planes in test order.
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::NegX,
        FrustumPlane::PosX,
        FrustumPlane::NegY,
        FrustumPlane::PosY,
        FrustumPlane::NegZ,
        FrustumPlane::PosZ,
    ];

    /// Plane index `0..=5`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-bit mask selecting this plane.
    pub fn mask(self) -> PlaneMask {
        PlaneMask::from_bits_truncate(1 << (self as u8))
    }

    /// Plane for an index `0..=5`.
    pub fn from_index(index: usize) -> Option<FrustumPlane> {
        Self::ALL.get(index).copied()
    }
}

bitflags! {
    /// Set of planes to test in the masked AABB tests.
    ///
    /// A cleared bit means "already known to be inside this plane". During a
    /// hierarchical descent a parent found fully inside a plane lets every
    /// child skip it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PlaneMask: u8 {
        const NEG_X = 1 << 0;
        const POS_X = 1 << 1;
        const NEG_Y = 1 << 2;
        const POS_Y = 1 << 3;
        const NEG_Z = 1 << 4;
        const POS_Z = 1 << 5;
    }
}

/// Result of a frustum/sphere classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SphereTest {
    /// Sphere is fully inside every plane
    Inside = -2,
    /// Sphere touches at least one plane
    Intersect = -1,
    /// Sphere is fully behind one plane
    Outside = -3,
}

impl SphereTest {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Result of a frustum/AABB classification.
///
/// Used for hierarchical culling:
/// - `Culled(plane)` → skip the entire subtree
/// - `Inside` → collect everything below without further testing
/// - `Intersect` → test individual objects and recurse into children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AabTest {
    /// Box is entirely inside the frustum
    Inside,
    /// Box straddles at least one plane
    Intersect,
    /// Box is entirely outside this plane (first rejecting plane)
    Culled(FrustumPlane),
}

impl AabTest {
    pub const INSIDE: i32 = -2;
    pub const INTERSECT: i32 = -1;

    /// `-2` inside, `-1` intersect, or the culling plane's index.
    pub fn code(self) -> i32 {
        match self {
            AabTest::Inside => Self::INSIDE,
            AabTest::Intersect => Self::INTERSECT,
            AabTest::Culled(plane) => plane.index() as i32,
        }
    }

    /// Whether any part of the box may be visible.
    pub fn is_visible(self) -> bool {
        !matches!(self, AabTest::Culled(_))
    }
}

/// A plane `a*x + b*y + c*z + d = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<S: Real = f32> {
    pub a: S,
    pub b: S,
    pub c: S,
    pub d: S,
}

impl<S: Real> Plane<S> {
    pub fn new(a: S, b: S, c: S, d: S) -> Self {
        Self { a, b, c, d }
    }

    /// Signed distance (for a normalized plane) from the point to the plane.
    #[inline]
    pub fn distance(&self, x: S, y: S, z: S) -> S {
        self.a * x + self.b * y + self.c * z + self.d
    }

    /// Length of (a, b, c).
    pub fn normal_length(&self) -> S {
        (self.a * self.a + self.b * self.b + self.c * self.c).sqrt()
    }

    /// Distance of the box corner farthest along the normal.
    #[inline]
    fn positive_distance(&self, min: &[S; 3], max: &[S; 3]) -> S {
        let zero = S::zero();
        self.distance(
            if self.a < zero { min[0] } else { max[0] },
            if self.b < zero { min[1] } else { max[1] },
            if self.c < zero { min[2] } else { max[2] },
        )
    }

    /// Distance of the box corner farthest against the normal.
    #[inline]
    fn negative_distance(&self, min: &[S; 3], max: &[S; 3]) -> S {
        let zero = S::zero();
        self.distance(
            if self.a < zero { max[0] } else { min[0] },
            if self.b < zero { max[1] } else { min[1] },
            if self.c < zero { max[2] } else { min[2] },
        )
    }
}

impl<S: Real> fmt::Display for Plane<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x + {}y + {}z + {} = 0", self.a, self.b, self.c, self.d)
    }
}

/// Six frustum planes extracted from a projection or model-view-projection
/// matrix.
///
/// Works with both perspective and orthographic projections. The planes
/// are passive data: nothing is recomputed until `set()` is called again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumPlanes<S: Real = f32> {
    planes: [Plane<S>; 6],
}

impl<S: Real> Default for FrustumPlanes<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Real> FrustumPlanes<S> {
    /// All planes zero. Every test passes until `set()` is called.
    pub fn new() -> Self {
        let zero = S::zero();
        Self {
            planes: [Plane::new(zero, zero, zero, zero); 6],
        }
    }

    /// Extract the planes of `m`.
    pub fn from_matrix(m: &impl ColumnMatrix4<S>) -> Self {
        let mut frustum = Self::new();
        frustum.set(m);
        frustum
    }

    /// Recompute all six planes from `m`.
    ///
    /// Uses the Gribb & Hartmann method: every plane is the fourth row of
    /// `m` plus or minus one of the first three rows, then normalized so
    /// that (A, B, C) is a unit vector.
    pub fn set(&mut self, m: &impl ColumnMatrix4<S>) -> &mut Self {
        let c = m.cols();
        // row r of the matrix is (c[0][r], c[1][r], c[2][r], c[3][r])
        let row = |r: usize| [c[0][r], c[1][r], c[2][r], c[3][r]];
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));
        let add = |a: [S; 4], b: [S; 4]| Plane::new(a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]);
        let sub = |a: [S; 4], b: [S; 4]| Plane::new(a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]);

        self.planes = [
            add(r3, r0),
            sub(r3, r0),
            add(r3, r1),
            sub(r3, r1),
            add(r3, r2),
            sub(r3, r2),
        ];

        for (plane, id) in self.planes.iter_mut().zip(FrustumPlane::ALL) {
            let len = plane.normal_length();
            if len > S::zero() {
                let inv = S::one() / len;
                plane.a = plane.a * inv;
                plane.b = plane.b * inv;
                plane.c = plane.c * inv;
                plane.d = plane.d * inv;
            } else {
                crate::spatial_warn!(
                    "galaxy3d::FrustumPlanes",
                    "Degenerate {:?} plane (zero normal), left unnormalized",
                    id
                );
            }
        }
        self
    }

    /// Plane by identifier.
    pub fn plane(&self, id: FrustumPlane) -> &Plane<S> {
        &self.planes[id.index()]
    }

    /// All planes, indexed by `FrustumPlane::index()`.
    pub fn planes(&self) -> &[Plane<S>; 6] {
        &self.planes
    }

    // ===== POINT / SPHERE =====

    /// Point is inside or on every plane.
    pub fn test_point(&self, p: impl Coord3<S>) -> bool {
        let (x, y, z) = (p.x(), p.y(), p.z());
        self.planes.iter().all(|plane| plane.distance(x, y, z) >= S::zero())
    }

    /// Conservative sphere test.
    ///
    /// Each plane is tested on its own, so a sphere just outside a frustum
    /// corner (behind no single plane) still reports `true`.
    pub fn test_sphere(&self, center: impl Coord3<S>, radius: S) -> bool {
        let (x, y, z) = (center.x(), center.y(), center.z());
        self.planes.iter().all(|plane| plane.distance(x, y, z) >= -radius)
    }

    /// Classify a sphere. Same conservative behavior as `test_sphere`.
    pub fn intersect_sphere(&self, center: impl Coord3<S>, radius: S) -> SphereTest {
        let (x, y, z) = (center.x(), center.y(), center.z());
        let mut inside = true;
        for plane in &self.planes {
            let dist = plane.distance(x, y, z);
            // a NaN distance is outside
            if dist >= -radius {
                inside &= dist >= radius;
            } else {
                return SphereTest::Outside;
            }
        }
        if inside { SphereTest::Inside } else { SphereTest::Intersect }
    }

    // ===== AXIS-ALIGNED BOX =====

    /// Box is (potentially) visible.
    ///
    /// Uses the "positive vertex" test: for each plane, only the corner
    /// farthest along the normal is checked. May return false positives
    /// for large boxes near frustum edges, never false negatives.
    pub fn test_aab(&self, min: impl Coord3<S>, max: impl Coord3<S>) -> bool {
        self.cull_aab(min, max).is_none()
    }

    /// First plane that fully rejects the box, or `None` if it may be visible.
    pub fn cull_aab(&self, min: impl Coord3<S>, max: impl Coord3<S>) -> Option<FrustumPlane> {
        self.cull_aab_masked(min, max, PlaneMask::all())
    }

    /// As `cull_aab`, skipping planes whose bit is clear in `mask`.
    pub fn cull_aab_masked(
        &self,
        min: impl Coord3<S>,
        max: impl Coord3<S>,
        mask: PlaneMask,
    ) -> Option<FrustumPlane> {
        let (min, max) = (corner(&min), corner(&max));
        FrustumPlane::ALL.into_iter().find(|&id| {
            mask.contains(id.mask())
                && self.planes[id.index()].positive_distance(&min, &max) < S::zero()
        })
    }

    /// Classify a box as inside, intersecting, or culled by a plane.
    pub fn intersect_aab(&self, min: impl Coord3<S>, max: impl Coord3<S>) -> AabTest {
        self.intersect_aab_masked(min, max, PlaneMask::all())
    }

    /// Classify a box, skipping the rejection test for planes whose bit is
    /// clear in `mask`.
    ///
    /// Masked-off planes still take part in the inside check, so `Inside`
    /// keeps meaning "fully inside all six planes".
    pub fn intersect_aab_masked(
        &self,
        min: impl Coord3<S>,
        max: impl Coord3<S>,
        mask: PlaneMask,
    ) -> AabTest {
        let (min, max) = (corner(&min), corner(&max));
        let mut inside = true;
        for id in FrustumPlane::ALL {
            let plane = &self.planes[id.index()];
            if mask.contains(id.mask()) && plane.positive_distance(&min, &max) < S::zero() {
                return AabTest::Culled(id);
            }
            inside &= plane.negative_distance(&min, &max) >= S::zero();
        }
        if inside { AabTest::Inside } else { AabTest::Intersect }
    }

    /// `test_aab` on an `AABB`.
    pub fn test_aabb(&self, aabb: &AABB<S>) -> bool {
        self.test_aab(aabb.min, aabb.max)
    }

    /// `intersect_aab` on an `AABB`.
    pub fn intersect_aabb(&self, aabb: &AABB<S>) -> AabTest {
        self.intersect_aab(aabb.min, aabb.max)
    }

    /// `intersect_aab_masked` on an `AABB`.
    pub fn intersect_aabb_masked(&self, aabb: &AABB<S>, mask: PlaneMask) -> AabTest {
        self.intersect_aab_masked(aabb.min, aabb.max, mask)
    }
}

fn corner<S: Real>(p: &impl Coord3<S>) -> [S; 3] {
    [p.x(), p.y(), p.z()]
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
