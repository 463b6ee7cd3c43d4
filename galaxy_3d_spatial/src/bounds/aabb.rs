/// AABB: axis-aligned bounding box over any coordinate scalar.
///
/// A freshly constructed box is *empty*: `min = +inf`, `max = -inf`
/// (or `MAX`/`MIN` for integer boxes). Merging anything into an empty
/// box yields that thing, and an empty box intersects nothing.
///
/// Every mutating operation exists twice: a pure form returning a new
/// box (`union`, `intersection`, `translated`, `transformed`) and an
/// in-place form (`merge`, `intersect`, `translate`, `transform`).

use std::fmt;
use crate::error::{Error, Result};
use crate::math::{ColumnMatrix4, Coord3, Interval, Real, Scalar};
use super::intersection::{self, LineSegmentHit};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB<S: Scalar = f32> {
    /// Minimum corner (x, y, z)
    pub min: [S; 3],
    /// Maximum corner (x, y, z)
    pub max: [S; 3],
}

/// Single precision box
pub type AABBf = AABB<f32>;
/// Double precision box
pub type AABBd = AABB<f64>;
/// Integer box (no ray/plane/sphere tests)
pub type AABBi = AABB<i32>;

impl<S: Scalar> Default for AABB<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar> AABB<S> {
    /// Create an empty box.
    pub fn new() -> Self {
        Self {
            min: [S::EMPTY_MIN; 3],
            max: [S::EMPTY_MAX; 3],
        }
    }

    /// Create a box from its six coordinates. No ordering is enforced.
    pub fn from_coords(min_x: S, min_y: S, min_z: S, max_x: S, max_y: S, max_z: S) -> Self {
        Self {
            min: [min_x, min_y, min_z],
            max: [max_x, max_y, max_z],
        }
    }

    /// Create a box from two corner points. No ordering is enforced.
    pub fn from_min_max(min: impl Coord3<S>, max: impl Coord3<S>) -> Self {
        Self {
            min: [min.x(), min.y(), min.z()],
            max: [max.x(), max.y(), max.z()],
        }
    }

    pub fn set_min(&mut self, min: impl Coord3<S>) -> &mut Self {
        self.min = [min.x(), min.y(), min.z()];
        self
    }

    pub fn set_max(&mut self, max: impl Coord3<S>) -> &mut Self {
        self.max = [max.x(), max.y(), max.z()];
        self
    }

    /// `min < max` on every axis (a flat box is not valid).
    pub fn is_valid(&self) -> bool {
        self.min[0] < self.max[0] && self.min[1] < self.max[1] && self.min[2] < self.max[2]
    }

    /// Whether this box is exactly the empty sentinel.
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// Minimum coordinate along `component` (0 = x, 1 = y, 2 = z).
    pub fn get_min(&self, component: usize) -> Result<S> {
        self.min
            .get(component)
            .copied()
            .ok_or_else(|| Error::ComponentOutOfRange(component).logged())
    }

    /// Maximum coordinate along `component` (0 = x, 1 = y, 2 = z).
    pub fn get_max(&self, component: usize) -> Result<S> {
        self.max
            .get(component)
            .copied()
            .ok_or_else(|| Error::ComponentOutOfRange(component).logged())
    }

    pub fn length_x(&self) -> S {
        S::wrapping_sub(self.max[0], self.min[0])
    }

    pub fn length_y(&self) -> S {
        S::wrapping_sub(self.max[1], self.min[1])
    }

    pub fn length_z(&self) -> S {
        S::wrapping_sub(self.max[2], self.min[2])
    }

    /// Edge lengths along x, y, z.
    pub fn size(&self) -> [S; 3] {
        [self.length_x(), self.length_y(), self.length_z()]
    }

    /// Swap `min`/`max` independently on every axis where `min > max`.
    pub fn correct_bounds(&mut self) -> &mut Self {
        for axis in 0..3 {
            if self.min[axis] > self.max[axis] {
                std::mem::swap(&mut self.min[axis], &mut self.max[axis]);
            }
        }
        self
    }

    // ===== UNION =====

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &AABB<S>) -> AABB<S> {
        let mut dest = *self;
        dest.merge(other);
        dest
    }

    /// Grow this box to enclose `other`.
    pub fn merge(&mut self, other: &AABB<S>) -> &mut Self {
        for axis in 0..3 {
            self.min[axis] = S::min_of(self.min[axis], other.min[axis]);
            self.max[axis] = S::max_of(self.max[axis], other.max[axis]);
        }
        self
    }

    /// Smallest box enclosing this box and the point.
    pub fn union_point(&self, p: impl Coord3<S>) -> AABB<S> {
        let mut dest = *self;
        dest.take_point(p);
        dest
    }

    /// Grow this box to enclose the point.
    pub fn take_point(&mut self, p: impl Coord3<S>) -> &mut Self {
        let p = [p.x(), p.y(), p.z()];
        for axis in 0..3 {
            self.min[axis] = S::min_of(self.min[axis], p[axis]);
            self.max[axis] = S::max_of(self.max[axis], p[axis]);
        }
        self
    }

    // ===== INTERSECTION =====

    /// Overlap of both boxes, or the empty box when they do not overlap.
    pub fn intersection(&self, other: &AABB<S>) -> AABB<S> {
        let mut dest = *self;
        dest.intersect(other);
        dest
    }

    /// Shrink this box to the overlap with `other`.
    ///
    /// Resets to the empty sentinel when the result is not `is_valid()`,
    /// so a chain of intersections never accumulates inverted bounds.
    pub fn intersect(&mut self, other: &AABB<S>) -> &mut Self {
        for axis in 0..3 {
            self.min[axis] = S::max_of(self.min[axis], other.min[axis]);
            self.max[axis] = S::min_of(self.max[axis], other.max[axis]);
        }
        if !self.is_valid() {
            *self = Self::new();
        }
        self
    }

    // ===== TRANSLATION =====

    pub fn translated(&self, offset: impl Coord3<S>) -> AABB<S> {
        let mut dest = *self;
        dest.translate(offset);
        dest
    }

    pub fn translate(&mut self, offset: impl Coord3<S>) -> &mut Self {
        let offset = [offset.x(), offset.y(), offset.z()];
        for axis in 0..3 {
            self.min[axis] = S::wrapping_add(self.min[axis], offset[axis]);
            self.max[axis] = S::wrapping_add(self.max[axis], offset[axis]);
        }
        self
    }

    // ===== QUERIES =====

    /// Point inside or on the boundary.
    pub fn contains_point(&self, p: impl Coord3<S>) -> bool {
        let p = [p.x(), p.y(), p.z()];
        (0..3).all(|axis| p[axis] >= self.min[axis] && p[axis] <= self.max[axis])
    }

    /// `other` lies entirely within this box (faces may coincide).
    pub fn contains_aabb(&self, other: &AABB<S>) -> bool {
        (0..3).all(|axis| other.min[axis] >= self.min[axis] && other.max[axis] <= self.max[axis])
    }

    /// Boxes overlap or touch.
    pub fn intersects_aabb(&self, other: &AABB<S>) -> bool {
        (0..3).all(|axis| self.max[axis] >= other.min[axis] && self.min[axis] <= other.max[axis])
    }

    /// The 8 corners. Bit 0 of the index selects max x, bit 1 max y, bit 2 max z.
    pub fn corners(&self) -> [[S; 3]; 8] {
        std::array::from_fn(|i| {
            [
                if i & 1 == 0 { self.min[0] } else { self.max[0] },
                if i & 2 == 0 { self.min[1] } else { self.max[1] },
                if i & 4 == 0 { self.min[2] } else { self.max[2] },
            ]
        })
    }
}

impl<S: Real> AABB<S> {
    /// Center point.
    pub fn center(&self) -> [S; 3] {
        let h = S::half();
        [
            self.min[0] + (self.max[0] - self.min[0]) * h,
            self.min[1] + (self.max[1] - self.min[1]) * h,
            self.min[2] + (self.max[2] - self.min[2]) * h,
        ]
    }

    /// Half of the edge lengths.
    pub fn extent(&self) -> [S; 3] {
        let h = S::half();
        [self.length_x() * h, self.length_y() * h, self.length_z() * h]
    }

    /// Box straddles or touches the plane `a*x + b*y + c*z + d = 0`.
    pub fn intersects_plane(&self, a: S, b: S, c: S, d: S) -> bool {
        intersection::test_aab_plane(self.min, self.max, a, b, c, d)
    }

    /// Sphere reaches the box. Takes the *squared* radius.
    pub fn intersects_sphere(&self, center: impl Coord3<S>, radius_squared: S) -> bool {
        intersection::test_aab_sphere(
            self.min,
            self.max,
            [center.x(), center.y(), center.z()],
            radius_squared,
        )
    }

    /// Ray hits the box (also when the origin is inside).
    pub fn intersects_ray(&self, origin: impl Coord3<S>, dir: impl Coord3<S>) -> bool {
        self.intersect_ray(origin, dir).is_some()
    }

    /// Ray hit parameters `(t_near, t_far)`, `None` on a miss.
    pub fn intersect_ray(&self, origin: impl Coord3<S>, dir: impl Coord3<S>) -> Option<Interval<S>> {
        intersection::intersect_ray_aab(
            [origin.x(), origin.y(), origin.z()],
            [dir.x(), dir.y(), dir.z()],
            self.min,
            self.max,
        )
    }

    /// Classify the segment `p0 -> p1` against this box.
    pub fn intersect_line_segment(&self, p0: impl Coord3<S>, p1: impl Coord3<S>) -> LineSegmentHit<S> {
        intersection::intersect_line_segment_aab(
            [p0.x(), p0.y(), p0.z()],
            [p1.x(), p1.y(), p1.z()],
            self.min,
            self.max,
        )
    }

    /// Bounds of this box after an affine transformation.
    ///
    /// Transforms all 8 corners by the rotation/translation part of `m`
    /// and takes their bounds. The projective row is ignored; passing a
    /// non-affine matrix gives unspecified results. The empty box stays empty.
    pub fn transformed(&self, m: &impl ColumnMatrix4<S>) -> AABB<S> {
        let mut dest = *self;
        dest.transform(m);
        dest
    }

    pub fn transform(&mut self, m: &impl ColumnMatrix4<S>) -> &mut Self {
        if self.is_empty() {
            return self;
        }
        let c = m.cols();
        let mut result = AABB::new();
        for [x, y, z] in self.corners() {
            result.take_point([
                c[0][0] * x + c[1][0] * y + c[2][0] * z + c[3][0],
                c[0][1] * x + c[1][1] * y + c[2][1] * z + c[3][1],
                c[0][2] * x + c[1][2] * y + c[2][2] * z + c[3][2],
            ]);
        }
        *self = result;
        self
    }
}

/// Integer boxes answer the float queries by promoting their corners to `f32`.
impl AABB<i32> {
    /// This box with `f32` corners.
    pub fn to_f32(&self) -> AABB<f32> {
        AABB {
            min: self.min.map(|v| v as f32),
            max: self.max.map(|v| v as f32),
        }
    }

    pub fn intersects_plane(&self, a: f32, b: f32, c: f32, d: f32) -> bool {
        self.to_f32().intersects_plane(a, b, c, d)
    }

    pub fn intersects_sphere(&self, center: impl Coord3<f32>, radius_squared: f32) -> bool {
        self.to_f32().intersects_sphere(center, radius_squared)
    }

    pub fn intersects_ray(&self, origin: impl Coord3<f32>, dir: impl Coord3<f32>) -> bool {
        self.to_f32().intersects_ray(origin, dir)
    }

    pub fn intersect_ray(&self, origin: impl Coord3<f32>, dir: impl Coord3<f32>) -> Option<Interval<f32>> {
        self.to_f32().intersect_ray(origin, dir)
    }

    pub fn intersect_line_segment(&self, p0: impl Coord3<f32>, p1: impl Coord3<f32>) -> LineSegmentHit<f32> {
        self.to_f32().intersect_line_segment(p0, p1)
    }

    /// Integer bounds of this box after an affine `f32` transformation.
    ///
    /// The transformed corners are rounded outwards: `min` down, `max` up.
    /// The empty box stays empty.
    pub fn transformed(&self, m: &impl ColumnMatrix4<f32>) -> AABB<i32> {
        let mut dest = *self;
        dest.transform(m);
        dest
    }

    pub fn transform(&mut self, m: &impl ColumnMatrix4<f32>) -> &mut Self {
        if self.is_empty() {
            return self;
        }
        let result = self.to_f32().transformed(m);
        self.min = result.min.map(|v| v.floor() as i32);
        self.max = result.max.map(|v| v.ceil() as i32);
        self
    }
}

impl<S: Scalar> fmt::Display for AABB<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {}) < ({} {} {})",
            self.min[0], self.min[1], self.min[2], self.max[0], self.max[1], self.max[2]
        )
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
