//! Small data types for personal projects.
//!
//! - `collections::CyclicList`: a `Vec` with wrap-around indexing.
//! - `geom2`: 2D points, vectors (cartesian and polar), and segments with
//!   tagged intersection results.
//!
//! The modules are independent of each other. Library code logs through
//! `tracing` and never installs a subscriber.

pub mod collections;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use collections::{CyclicError, CyclicList};
pub use geom2::{GeomCfg, GeomError, Intersection, Point2D, Polar, Segment2D, Vector2D};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::collections::{CyclicError, CyclicList};
    pub use crate::geom2::{
        DegeneratePolicy, GeomCfg, GeomError, Intersection, Point2D, Polar, Segment2D, Vector2D,
        DEFAULT_EPS,
    };
}
