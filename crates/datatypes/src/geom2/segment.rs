//! Closed line segments and segment/segment intersection.
//!
//! Model
//! - A segment is `P(t) = a + t·(b − a)`, `t ∈ [0, 1]`.
//! - Two segments are solved as a 2×2 system in `(t, u)`. A determinant with
//!   `|d1 × d2| <= eps_det·|d1|·|d2|` is treated as parallel.
//! - Parallel input is collinear only when both ends of the other segment lie
//!   within `eps_feas` of this line; collinear ranges are projected onto this
//!   segment (disjoint, touching, or overlapping). Otherwise the other segment
//!   is either strictly on one side (disjoint) or meets the line at a point
//!   found from the two signed end distances.
//! - Zero-length segments follow `GeomCfg::degenerate`.
//!
//! Outcomes are always one of `Intersection::{Disjoint, Point, Overlap}`;
//! endpoints that take part in the result are returned exactly, not recomputed.
//!
//! Code cross-refs: `types::{GeomCfg, DegeneratePolicy, GeomError}`

use std::fmt;

use serde::{Deserialize, Serialize};

use super::point::Point2D;
use super::types::{DegeneratePolicy, GeomCfg, GeomError};
use super::vector::Vector2D;

/// Closed segment from `a` to `b`.
///
/// Equality compares endpoints in order (directed); see `same_undirected`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment2D {
    pub a: Point2D,
    pub b: Point2D,
}

/// Result of a segment/segment intersection query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Intersection {
    /// No common point.
    Disjoint,
    /// Exactly one common point (crossing, touching endpoints, or a
    /// degenerate segment lying on the other).
    Point(Point2D),
    /// Collinear segments sharing a sub-segment of positive length, oriented
    /// like the segment the query was made on.
    Overlap(Segment2D),
}

impl Intersection {
    #[inline]
    pub fn is_disjoint(&self) -> bool {
        matches!(self, Intersection::Disjoint)
    }

    /// The single intersection point, if the outcome is `Point`.
    #[inline]
    pub fn point(&self) -> Option<Point2D> {
        match self {
            Intersection::Point(p) => Some(*p),
            _ => None,
        }
    }

    #[inline]
    pub fn overlap(&self) -> Option<Segment2D> {
        match self {
            Intersection::Overlap(s) => Some(*s),
            _ => None,
        }
    }
}

impl Segment2D {
    #[inline]
    pub fn new(a: Point2D, b: Point2D) -> Self {
        Self { a, b }
    }

    /// `b − a`.
    #[inline]
    pub fn direction(&self) -> Vector2D {
        self.b - self.a
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    #[inline]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.length() <= eps
    }

    /// `a + t·(b − a)`; exact at `t = 0` and `t = 1`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point2D {
        self.a.lerp(&self.b, t)
    }

    #[inline]
    pub fn midpoint(&self) -> Point2D {
        self.point_at(0.5)
    }

    #[inline]
    pub fn reversed(&self) -> Segment2D {
        Segment2D::new(self.b, self.a)
    }

    /// Same endpoint set, ignoring direction.
    pub fn same_undirected(&self, other: &Segment2D) -> bool {
        self == other || (self.a == other.b && self.b == other.a)
    }

    /// Euclidean distance from `p` to the closest point of the segment.
    pub fn distance_to_point(&self, p: Point2D) -> f64 {
        let d = self.direction();
        let len_sq = d.length_squared();
        if len_sq == 0.0 {
            return self.a.distance(&p);
        }
        let t = ((p - self.a).dot(&d) / len_sq).clamp(0.0, 1.0);
        self.point_at(t).distance(&p)
    }

    #[inline]
    pub fn contains_point(&self, p: Point2D, eps: f64) -> bool {
        self.distance_to_point(p) <= eps
    }

    /// Intersection under default tolerances; zero-length segments act as points.
    pub fn intersection(&self, other: &Segment2D) -> Intersection {
        self.classify(other, &GeomCfg::default())
    }

    /// Intersection under `cfg`. Fails only with `DegeneratePolicy::Reject` and a
    /// zero-length input.
    pub fn intersection_with(
        &self,
        other: &Segment2D,
        cfg: GeomCfg,
    ) -> Result<Intersection, GeomError> {
        if cfg.degenerate == DegeneratePolicy::Reject
            && (self.is_degenerate(cfg.eps_feas) || other.is_degenerate(cfg.eps_feas))
        {
            return Err(GeomError::DegenerateSegment);
        }
        Ok(self.classify(other, &cfg))
    }

    #[inline]
    pub fn intersects_with(&self, other: &Segment2D) -> bool {
        !self.intersection(other).is_disjoint()
    }

    fn classify(&self, other: &Segment2D, cfg: &GeomCfg) -> Intersection {
        match (
            self.is_degenerate(cfg.eps_feas),
            other.is_degenerate(cfg.eps_feas),
        ) {
            (true, true) => {
                tracing::trace!(a = %self.a, b = %other.a, "both segments degenerate");
                return if self.a.distance(&other.a) <= cfg.eps_feas {
                    Intersection::Point(self.a)
                } else {
                    Intersection::Disjoint
                };
            }
            (true, false) => {
                tracing::trace!(p = %self.a, "degenerate segment treated as point");
                return on_segment(other, self.a, cfg);
            }
            (false, true) => {
                tracing::trace!(p = %other.a, "degenerate segment treated as point");
                return on_segment(self, other.a, cfg);
            }
            (false, false) => {}
        }

        let d1 = self.direction();
        let d2 = other.direction();
        let w = other.a - self.a;
        let det = d1.cross(&d2);
        if det.abs() <= cfg.eps_det * d1.length() * d2.length() {
            return self.classify_parallel(other, d1, w, cfg);
        }

        let t = w.cross(&d2) / det;
        let u = w.cross(&d1) / det;
        let lo = -cfg.eps_param;
        let hi = 1.0 + cfg.eps_param;
        if !((lo..=hi).contains(&t) && (lo..=hi).contains(&u)) {
            return Intersection::Disjoint;
        }
        let t = t.clamp(0.0, 1.0);
        let u = u.clamp(0.0, 1.0);
        // Prefer an exact endpoint of either segment when the hit lands on one.
        let p = if t == 0.0 || t == 1.0 || !(u == 0.0 || u == 1.0) {
            self.point_at(t)
        } else {
            other.point_at(u)
        };
        Intersection::Point(p)
    }

    fn classify_parallel(
        &self,
        other: &Segment2D,
        d1: Vector2D,
        w: Vector2D,
        cfg: &GeomCfg,
    ) -> Intersection {
        let len1 = d1.length();
        // Signed distances of both ends of `other` from this segment's line.
        let off_a = d1.cross(&w) / len1;
        let off_b = d1.cross(&(other.b - self.a)) / len1;
        let on_a = off_a.abs() <= cfg.eps_feas;
        let on_b = off_b.abs() <= cfg.eps_feas;
        if !(on_a && on_b) {
            if !on_a && !on_b && (off_a > 0.0) == (off_b > 0.0) {
                tracing::debug!(off_a, off_b, "parallel segments on distinct lines");
                return Intersection::Disjoint;
            }
            // `other` meets this line at a single point; no determinant division.
            let p = if on_a {
                other.a
            } else if on_b {
                other.b
            } else {
                other.point_at(off_a / (off_a - off_b))
            };
            tracing::debug!(off_a, off_b, p = %p, "near-parallel segments cross the line");
            return on_segment(self, p, cfg);
        }

        let len_sq = d1.length_squared();
        let t0 = w.dot(&d1) / len_sq;
        let t1 = (other.b - self.a).dot(&d1) / len_sq;
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        let slack = cfg.eps_param.max(cfg.eps_feas / len1);
        tracing::debug!(t0, t1, lo, hi, "collinear segments");

        let at = |t: f64| {
            if t == t0 {
                other.a
            } else if t == t1 {
                other.b
            } else {
                self.point_at(t)
            }
        };
        if lo > hi + slack {
            Intersection::Disjoint
        } else if hi - lo <= slack {
            let t = if lo <= hi {
                lo
            } else {
                (0.5 * (lo + hi)).clamp(0.0, 1.0)
            };
            Intersection::Point(at(t))
        } else {
            Intersection::Overlap(Segment2D::new(at(lo), at(hi)))
        }
    }
}

fn on_segment(seg: &Segment2D, p: Point2D, cfg: &GeomCfg) -> Intersection {
    if seg.contains_point(p, cfg.eps_feas) {
        Intersection::Point(p)
    } else {
        Intersection::Disjoint
    }
}

impl fmt::Display for Segment2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.a, self.b)
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intersection::Disjoint => write!(f, "disjoint"),
            Intersection::Point(p) => write!(f, "point {p}"),
            Intersection::Overlap(s) => write!(f, "overlap {s}"),
        }
    }
}
