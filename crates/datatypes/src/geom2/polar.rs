//! Polar form `(r, θ)` of a 2D vector.
//!
//! Invariants:
//! - `r >= 0`; `θ` in (-π, π], radians; `r == 0` forces `θ == 0`.
//! - Finiteness is checked only where a `Polar` is built from raw numbers
//!   (`new`, `from_degrees`, deserialization). `rotate`, `scale` and
//!   `Vector2D::to_polar` follow IEEE arithmetic like `Vector2D`, so a
//!   non-finite input gives a non-finite result.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::GeomError;
use super::util::normalize_angle;
use super::vector::Vector2D;

/// Magnitude and direction of a displacement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPolar", into = "RawPolar")]
pub struct Polar {
    r: f64,
    theta: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawPolar {
    r: f64,
    theta: f64,
}

impl Polar {
    /// Validates `r`, normalizes `theta` into (-π, π].
    pub fn new(r: f64, theta: f64) -> Result<Self, GeomError> {
        if !r.is_finite() || !theta.is_finite() {
            return Err(GeomError::NonFinite);
        }
        if r < 0.0 {
            return Err(GeomError::NegativeMagnitude { r });
        }
        Ok(Self::from_parts(r, theta))
    }

    pub fn from_degrees(r: f64, degrees: f64) -> Result<Self, GeomError> {
        Self::new(r, degrees.to_radians())
    }

    /// Caller guarantees `r >= 0`.
    #[inline]
    pub(crate) fn from_parts(r: f64, theta: f64) -> Self {
        if r == 0.0 {
            Self { r: 0.0, theta: 0.0 }
        } else {
            Self {
                r,
                theta: normalize_angle(theta),
            }
        }
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    #[inline]
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }

    #[inline]
    pub fn to_cartesian(&self) -> Vector2D {
        Vector2D::from_polar(self.r, self.theta)
    }

    #[inline]
    pub fn rotate(&self, angle: f64) -> Polar {
        Self::from_parts(self.r, self.theta + angle)
    }

    /// Multiplies the magnitude; a negative factor also flips the direction.
    /// A non-finite factor yields a non-finite magnitude.
    pub fn scale(&self, factor: f64) -> Polar {
        if factor < 0.0 {
            Self::from_parts(self.r * -factor, self.theta + std::f64::consts::PI)
        } else {
            Self::from_parts(self.r * factor, self.theta)
        }
    }

    /// Same direction, `r = 1`; the zero vector stays zero.
    pub fn unit(&self) -> Polar {
        if self.r == 0.0 {
            *self
        } else {
            Self::from_parts(1.0, self.theta)
        }
    }

    /// Smallest unsigned angle between the two directions, in [0, π].
    pub fn angle_with(&self, other: &Polar) -> f64 {
        normalize_angle(self.theta - other.theta).abs()
    }

    #[inline]
    pub fn approx_eq(&self, other: &Polar, eps: f64) -> bool {
        (self.r - other.r).abs() <= eps && self.angle_with(other) <= eps
    }
}

impl std::ops::Neg for Polar {
    type Output = Polar;
    #[inline]
    fn neg(self) -> Self::Output {
        self.rotate(std::f64::consts::PI)
    }
}

impl From<Vector2D> for Polar {
    #[inline]
    fn from(v: Vector2D) -> Self {
        v.to_polar()
    }
}

impl TryFrom<RawPolar> for Polar {
    type Error = GeomError;
    fn try_from(raw: RawPolar) -> Result<Self, Self::Error> {
        Polar::new(raw.r, raw.theta)
    }
}

impl From<Polar> for RawPolar {
    fn from(p: Polar) -> Self {
        RawPolar {
            r: p.r,
            theta: p.theta,
        }
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.2}, {:.2} rad>", self.r, self.theta)
    }
}
