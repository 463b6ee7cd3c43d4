/// Box intersection routines shared by `AABB` and the frustum.
///
/// All routines take the box as `min`/`max` corner arrays and operate on
/// raw IEEE arithmetic: a zero direction component yields an infinite
/// reciprocal, which is exactly the "parallel to this slab" case.

use crate::math::{Interval, Real};

/// Classification of a line segment against a box.
///
/// Every hit variant carries the clipped parameter range in `[0, 1]`
/// terms of `p0 + t * (p1 - p0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSegmentHit<S: Real> {
    /// The segment does not touch the box.
    Outside,
    /// Both end points lie inside the box.
    Inside(Interval<S>),
    /// Exactly one end point lies inside the box; `near == far` is the crossing.
    OneIntersection(Interval<S>),
    /// The segment enters and leaves the box.
    TwoIntersections(Interval<S>),
}

impl<S: Real> LineSegmentHit<S> {
    pub const OUTSIDE: i32 = -1;
    pub const ONE_INTERSECTION: i32 = 1;
    pub const TWO_INTERSECTION: i32 = 2;
    pub const INSIDE: i32 = 3;

    /// Integer classification code.
    pub fn code(&self) -> i32 {
        match self {
            LineSegmentHit::Outside => Self::OUTSIDE,
            LineSegmentHit::Inside(_) => Self::INSIDE,
            LineSegmentHit::OneIntersection(_) => Self::ONE_INTERSECTION,
            LineSegmentHit::TwoIntersections(_) => Self::TWO_INTERSECTION,
        }
    }

    /// Clipped parameter range, `None` when outside.
    pub fn interval(&self) -> Option<Interval<S>> {
        match *self {
            LineSegmentHit::Outside => None,
            LineSegmentHit::Inside(i)
            | LineSegmentHit::OneIntersection(i)
            | LineSegmentHit::TwoIntersections(i) => Some(i),
        }
    }

    pub fn is_hit(&self) -> bool {
        !matches!(self, LineSegmentHit::Outside)
    }
}

/// Whether the box straddles or touches the plane `a*x + b*y + c*z + d = 0`.
pub fn test_aab_plane<S: Real>(min: [S; 3], max: [S; 3], a: S, b: S, c: S, d: S) -> bool {
    let normal = [a, b, c];
    let mut p = [S::zero(); 3];
    let mut n = [S::zero(); 3];
    for axis in 0..3 {
        if normal[axis] > S::zero() {
            p[axis] = max[axis];
            n[axis] = min[axis];
        } else {
            p[axis] = min[axis];
            n[axis] = max[axis];
        }
    }
    let dist_n = d + a * n[0] + b * n[1] + c * n[2];
    let dist_p = d + a * p[0] + b * p[1] + c * p[2];
    dist_n <= S::zero() && dist_p >= S::zero()
}

/// Whether the sphere reaches the box: squared distance from the center
/// to the closest box point is at most `radius_squared`.
pub fn test_aab_sphere<S: Real>(min: [S; 3], max: [S; 3], center: [S; 3], radius_squared: S) -> bool {
    let mut remaining = radius_squared;
    for axis in 0..3 {
        let c = center[axis];
        if c < min[axis] {
            let d = c - min[axis];
            remaining = remaining - d * d;
        } else if c > max[axis] {
            let d = c - max[axis];
            remaining = remaining - d * d;
        }
    }
    remaining >= S::zero()
}

/// Slab interval `[t_near, t_far]` of the line `origin + t * dir` through the box.
fn slab_interval<S: Real>(origin: [S; 3], dir: [S; 3], min: [S; 3], max: [S; 3]) -> (S, S) {
    let mut t_near = S::neg_infinity();
    let mut t_far = S::infinity();
    for axis in 0..3 {
        let inv = S::one() / dir[axis];
        let t_min = (min[axis] - origin[axis]) * inv;
        let t_max = (max[axis] - origin[axis]) * inv;
        let t1 = S::min_of(t_min, t_max);
        let t2 = S::max_of(t_min, t_max);
        t_near = S::max_of(t_near, t1);
        t_far = S::min_of(t_far, t2);
    }
    (t_near, t_far)
}

/// Ray/box slab test returning `(t_near, t_far)` on a hit.
///
/// `t_near` is negative when the origin lies inside the box. A ray that
/// only grazes an edge (`t_near == t_far`) is a miss.
pub fn intersect_ray_aab<S: Real>(
    origin: [S; 3],
    dir: [S; 3],
    min: [S; 3],
    max: [S; 3],
) -> Option<Interval<S>> {
    let (t_near, t_far) = slab_interval(origin, dir, min, max);
    if t_near < t_far && t_far >= S::zero() {
        Some(Interval::new(t_near, t_far))
    } else {
        None
    }
}

/// Ray/box slab test without the parameters.
pub fn test_ray_aab<S: Real>(origin: [S; 3], dir: [S; 3], min: [S; 3], max: [S; 3]) -> bool {
    intersect_ray_aab(origin, dir, min, max).is_some()
}

/// Segment `p0 -> p1` against the box, restricted to `t` in `[0, 1]`.
pub fn intersect_line_segment_aab<S: Real>(
    p0: [S; 3],
    p1: [S; 3],
    min: [S; 3],
    max: [S; 3],
) -> LineSegmentHit<S> {
    let dir = [p1[0] - p0[0], p1[1] - p0[1], p1[2] - p0[2]];
    let (mut t_near, mut t_far) = slab_interval(p0, dir, min, max);
    let zero = S::zero();
    let one = S::one();

    if !(t_near < t_far && t_near <= one && t_far >= zero) {
        return LineSegmentHit::Outside;
    }

    if t_near > zero && t_far > one {
        t_far = t_near;
        LineSegmentHit::OneIntersection(Interval::new(t_near, t_far))
    } else if t_near < zero && t_far < one {
        t_near = t_far;
        LineSegmentHit::OneIntersection(Interval::new(t_near, t_far))
    } else if t_near < zero && t_far > one {
        LineSegmentHit::Inside(Interval::new(t_near, t_far))
    } else {
        LineSegmentHit::TwoIntersections(Interval::new(t_near, t_far))
    }
}

#[cfg(test)]
#[path = "intersection_tests.rs"]
mod tests;
