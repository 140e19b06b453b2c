//! Collections with non-standard indexing.
//!
//! - `CyclicList`: wrap-around indexing over a `Vec`, for closed polylines,
//!   round-robin schedules, and other ring-shaped data.

mod cyclic;

pub use cyclic::{CyclicError, CyclicList, Window};
