//! 2D value types: points, vectors (cartesian + polar), and segments.
//!
//! Purpose
//! - Small `Copy` types with operator overloads for affine arithmetic:
//!   `Point2D − Point2D = Vector2D`, `Point2D ± Vector2D = Point2D`.
//! - Segment/segment intersection with an explicit, tagged outcome and
//!   explicit tolerances (`GeomCfg`).
//!
//! Equality policy
//! - `PartialEq` is exact on components. Tolerance comparisons go through
//!   `approx_eq(other, eps)` (max-abs metric); `DEFAULT_EPS` is a sane default.
//!
//! Code cross-refs: `Point2D`, `Vector2D`, `Polar`, `Segment2D`, `GeomCfg`

mod point;
mod polar;
mod segment;
mod types;
mod util;
mod vector;

pub use point::Point2D;
pub use polar::Polar;
pub use segment::{Intersection, Segment2D};
pub use types::{DegeneratePolicy, GeomCfg, GeomError, DEFAULT_EPS};
pub use vector::Vector2D;

#[cfg(test)]
mod tests;
