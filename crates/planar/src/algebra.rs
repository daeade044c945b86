//! Integer vector algebra in the plane.
//!
//! - `Vec2`: `nalgebra::Vector2<i64>` — componentwise add/sub, scalar scale,
//!   and negation come from nalgebra and stay in exact integer arithmetic.
//! - `dot`, `cross`, `norm_squared`: free functions so predicate code reads
//!   like the math it implements.
//!
//! `norm_squared` is spelled `dot(v, v)` here because nalgebra's own
//! `norm_squared` requires a field scalar.

use nalgebra::Vector2;

/// 2D displacement/direction with `i64` components.
pub type Vec2 = Vector2<i64>;

/// `u.x*v.x + u.y*v.y`, exact.
#[inline]
pub fn dot(u: Vec2, v: Vec2) -> i64 {
    u.dot(&v)
}

/// `u.x*v.y - u.y*v.x`, exact. Positive iff `v` is counter-clockwise from `u`.
#[inline]
pub fn cross(u: Vec2, v: Vec2) -> i64 {
    u.perp(&v)
}

/// Squared Euclidean norm, `dot(v, v)`. Always >= 0.
#[inline]
pub fn norm_squared(v: Vec2) -> i64 {
    dot(v, v)
}

/// True iff both values are strictly positive or both strictly negative.
///
/// Zero is never "same sign": the crossing predicates handle zeros through
/// their containment pre-checks, and this choice keeps collinear touches from
/// being counted twice.
#[inline]
pub(crate) fn same_sign(a: i64, b: i64) -> bool {
    (a > 0 && b > 0) || (a < 0 && b < 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn dot_and_cross_axis_aligned() {
        let e_x = Vec2::new(1, 0);
        let e_y = Vec2::new(0, 1);
        assert_eq!(dot(e_x, e_y), 0);
        assert_eq!(cross(e_x, e_y), 1);
        assert_eq!(cross(e_y, e_x), -1);
        assert_eq!(norm_squared(Vec2::new(3, 4)), 25);
    }

    #[test]
    fn cross_antisymmetry_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let u = Vec2::new(rng.gen_range(-1000..=1000), rng.gen_range(-1000..=1000));
            let v = Vec2::new(rng.gen_range(-1000..=1000), rng.gen_range(-1000..=1000));
            assert_eq!(cross(u, v), -cross(v, u));
            assert_eq!(dot(u, v), dot(v, u));
            assert_eq!(cross(u, u), 0);
        }
    }

    #[test]
    fn same_sign_treats_zero_as_neither() {
        assert!(same_sign(3, 7));
        assert!(same_sign(-3, -7));
        assert!(!same_sign(3, -7));
        assert!(!same_sign(0, 7));
        assert!(!same_sign(-3, 0));
        assert!(!same_sign(0, 0));
    }
}
