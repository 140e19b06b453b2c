//! Tolerances, policies, and errors shared by the 2D value types.
//!
//! - `GeomCfg`: centralizes epsilons for parallel detection, collinearity, and
//!   parameter-range slack, plus the degenerate-segment policy.
//! - `GeomError`: everything the 2D constructors and queries can reject.
//!
//! Code cross-refs: `segment::Segment2D::intersection_with`, `polar::Polar::new`

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default tolerance for `approx_eq` comparisons.
pub const DEFAULT_EPS: f64 = 1e-9;

/// What an intersection query does with a zero-length segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Treat the segment as the single point it collapses to.
    #[default]
    AsPoint,
    /// Refuse the query with `GeomError::DegenerateSegment`.
    Reject,
}

/// Geometry configuration (tolerances).
///
/// Defaults are fixed so that results are reproducible; override only for
/// inputs at unusual scales.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeomCfg {
    /// Relative determinant cutoff: directions with `|d1 × d2| <= eps_det·|d1|·|d2|`
    /// are parallel.
    pub eps_det: f64,
    /// Absolute distance below which a point counts as lying on a line or segment.
    pub eps_feas: f64,
    /// Slack applied to the closed parameter range `[0, 1]`.
    pub eps_param: f64,
    pub degenerate: DegeneratePolicy,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_feas: 1e-9,
            eps_param: 1e-12,
            degenerate: DegeneratePolicy::AsPoint,
        }
    }
}

impl GeomCfg {
    /// Same tolerances, zero-length segments rejected.
    #[inline]
    pub fn strict() -> Self {
        Self {
            degenerate: DegeneratePolicy::Reject,
            ..Self::default()
        }
    }
}

/// Errors surfaced by the 2D geometry types.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A zero-length segment was used where the policy forbids it.
    DegenerateSegment,
    /// Polar magnitude must be non-negative.
    NegativeMagnitude { r: f64 },
    /// NaN or infinite component.
    NonFinite,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::DegenerateSegment => {
                write!(f, "segment has zero length (endpoints coincide)")
            }
            GeomError::NegativeMagnitude { r } => {
                write!(f, "polar magnitude must be >= 0, got {r}")
            }
            GeomError::NonFinite => write!(f, "component is NaN or infinite"),
        }
    }
}

impl std::error::Error for GeomError {}
