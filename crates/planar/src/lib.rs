//! Exact 2D geometry primitives over integer coordinates.
//!
//! Purpose
//! - Model a small closed set of planar shapes (points, segments, lines,
//!   rays, circles) with `i64` coordinates and provide deterministic boolean
//!   predicates over them: point containment, segment crossing, and rigid
//!   translation. No floating point anywhere in the predicate path, so
//!   results are exact and reproducible.
//!
//! Precondition (overflow headroom)
//! - All arithmetic is `i64` and unchecked in release builds. Every predicate
//!   is exact while intermediates fit; the circle–segment far case squares a
//!   line substitution (fourth order in input magnitudes), so the blanket
//!   safe range is coordinate and radius magnitudes up to [`COORD_LIMIT`].
//!   First-order predicates (dot/cross of differences) stay exact up to about
//!   `1e9`. The dev profile keeps overflow checks on, so violations trap in
//!   tests instead of wrapping silently.

pub mod algebra;
pub mod shape2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest coordinate/radius magnitude for which *every* predicate is exact.
///
/// Driven by the circle–segment far case, which compares
/// `value² <= r²·(a² + b²)` with `value` quadratic in the inputs.
pub const COORD_LIMIT: i64 = 10_000;

pub use algebra::{cross, dot, norm_squared, Vec2};
pub use shape2::{AnyShape, Circle, Line, Point, Ray, Segment, Shape};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algebra::{cross, dot, norm_squared, Vec2};
    pub use crate::shape2::rand::{draw_shape, Bounds, ReplayToken, ShapeKind};
    pub use crate::shape2::{AnyShape, Circle, Line, Point, Ray, Segment, Shape};
    pub use crate::COORD_LIMIT;
}
