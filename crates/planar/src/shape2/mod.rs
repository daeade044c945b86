//! Planar shapes and their exact predicates.
//!
//! Purpose
//! - Five value-type shapes (`Point`, `Segment`, `Line`, `Ray`, `Circle`)
//!   sharing one capability set: translate, point containment, and
//!   segment-crossing. Predicates are pure integer case analysis; there is no
//!   tolerance parameter because there is no rounding.
//!
//! Layout
//! - `types`: representations, constructors, accessors, translation.
//! - `predicates`: the containment/crossing case analysis per shape.
//! - `dynamic`: the `Shape` trait and the closed `AnyShape` sum type for
//!   heterogeneous collections.
//! - `rand`: seeded, replayable shape sampling for tests and benches.

pub mod rand;
mod dynamic;
mod predicates;
mod types;

pub use dynamic::{AnyShape, Shape};
pub use types::{Circle, Line, Point, Ray, Segment};
