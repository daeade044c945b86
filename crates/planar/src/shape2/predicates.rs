//! Exact containment and segment-crossing predicates.
//!
//! Every test below reduces to integer signs of dot and cross products (or a
//! squared comparison for circles), so there is no epsilon anywhere. The
//! crossing tests all follow the same shape: handle touching/collinear cases
//! through containment pre-checks first, then strict sign comparisons via
//! `same_sign` (which treats zero as "not same sign", so boundary hits are
//! never counted twice).
//!
//! Overflow: cross/dot of coordinate differences are second-order in the
//! input magnitudes; the circle far case is fourth-order. See `COORD_LIMIT`
//! on the crate root.

use crate::algebra::{cross, dot, norm_squared, same_sign};

use super::types::{Circle, Line, Point, Ray, Segment};

impl Point {
    /// Exact coordinate equality with `other`.
    #[inline]
    pub fn contains_point(&self, other: Point) -> bool {
        *self == other
    }

    /// True iff `seg` contains this point.
    #[inline]
    pub fn cross_segment(&self, seg: &Segment) -> bool {
        seg.contains_point(*self)
    }
}

impl Segment {
    /// True iff `p` lies on the closed segment: collinear with the endpoints
    /// and between them. A degenerate segment contains only its single point
    /// (both tests reduce to `p == a`).
    pub fn contains_point(&self, p: Point) -> bool {
        let to_a = self.a - p;
        let to_b = self.b - p;
        cross(to_a, to_b) == 0 && dot(to_a, to_b) <= 0
    }

    /// Exact segment–segment intersection test, symmetric in its arguments.
    ///
    /// Endpoint containment goes first: it covers touching configurations and
    /// collinear overlap. After that, parallel directions mean disjoint, and
    /// the general position case is the opposite-sides test applied from both
    /// segments.
    pub fn cross_segment(&self, other: &Segment) -> bool {
        if other.contains_point(self.a) || other.contains_point(self.b) {
            return true;
        }
        if self.contains_point(other.a) || self.contains_point(other.b) {
            return true;
        }
        let dir = self.direction();
        let dir_other = other.direction();
        if cross(dir, dir_other) == 0 {
            // Parallel and not touching (overlap was caught above).
            return false;
        }

        let to_a = other.a - self.a;
        let to_b = other.b - self.a;
        if same_sign(cross(dir, to_a), cross(dir, to_b)) {
            return false;
        }

        let to_a = self.a - other.a;
        let to_b = self.b - other.a;
        !same_sign(cross(dir_other, to_a), cross(dir_other, to_b))
    }
}

impl Line {
    /// True iff `p` satisfies the line equation. The degenerate `(0,0,0)`
    /// line contains every point.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.eval(p) == 0
    }

    /// True iff `seg` meets the line: its endpoints do not lie strictly on
    /// the same side (an endpoint on the line counts as a crossing).
    #[inline]
    pub fn cross_segment(&self, seg: &Segment) -> bool {
        !same_sign(self.eval(seg.a), self.eval(seg.b))
    }
}

impl Ray {
    /// True iff `p` lies on the ray: collinear with the direction and in the
    /// forward half (the origin itself included).
    pub fn contains_point(&self, p: Point) -> bool {
        let disp = p - self.origin;
        cross(disp, self.dir) == 0 && dot(disp, self.dir) >= 0
    }

    /// True iff `seg` meets the ray.
    ///
    /// The supporting line must cross the segment at all; beyond that, either
    /// an endpoint sits on the ray directly, or the segment must lie on the
    /// forward side of the origin, which the final cross-sign comparison
    /// checks without computing the intersection point.
    pub fn cross_segment(&self, seg: &Segment) -> bool {
        if !self.supporting_line().cross_segment(seg) {
            return false;
        }
        if self.contains_point(seg.a) || self.contains_point(seg.b) {
            return true;
        }
        let to_a = seg.a - self.origin;
        let to_b = seg.b - self.origin;
        same_sign(cross(to_a, self.dir), cross(to_a, to_b))
    }
}

impl Circle {
    /// Closed-disk containment: `|p - center|² <= r²`.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        norm_squared(p - self.center) <= self.radius * self.radius
    }

    /// True iff `seg` crosses the *boundary circle* (not the disk): a chord
    /// with both endpoints strictly inside returns false.
    ///
    /// Case analysis on the endpoints' squared distances against `r²`:
    /// on the boundary means crossing, both strictly inside means chord (no
    /// crossing), exactly one inside means the segment exits through the
    /// boundary. With both outside, the segment crosses iff the foot of the
    /// perpendicular from the center to the supporting line is within `r`,
    /// compared squared to stay exact: `value² <= r²·(a² + b²)`.
    pub fn cross_segment(&self, seg: &Segment) -> bool {
        let a_dist_sq = norm_squared(seg.a - self.center);
        let b_dist_sq = norm_squared(seg.b - self.center);
        let r_sq = self.radius * self.radius;
        if a_dist_sq == r_sq || b_dist_sq == r_sq {
            return true;
        }
        if a_dist_sq < r_sq && b_dist_sq < r_sq {
            return false;
        }
        if a_dist_sq < r_sq || b_dist_sq < r_sq {
            return true;
        }
        let line = Line::through(seg.a, seg.b);
        let value = line.eval(self.center);
        value * value <= r_sq * (line.a * line.a + line.b * line.b)
    }
}
