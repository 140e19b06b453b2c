//! Absolute positions in the plane.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::vector::Vector2D;

/// A position `(x, y)`.
///
/// Equality is exact on both components; use `approx_eq` for tolerance checks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point2D {
    coords: Vector2<f64>,
}

impl Point2D {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn origin() -> Self {
        Self {
            coords: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Position vector (displacement from the origin).
    #[inline]
    pub fn to_vector(self) -> Vector2D {
        Vector2D::from(self.coords)
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.coords.x, self.coords.y]
    }

    #[inline]
    pub fn distance(&self, other: &Point2D) -> f64 {
        (*other - *self).length()
    }

    /// `self + t·(other − self)`; `t = 0` and `t = 1` return the endpoints exactly.
    pub fn lerp(&self, other: &Point2D, t: f64) -> Point2D {
        if t == 0.0 {
            *self
        } else if t == 1.0 {
            *other
        } else {
            *self + (*other - *self) * t
        }
    }

    /// Max-abs component comparison.
    #[inline]
    pub fn approx_eq(&self, other: &Point2D, eps: f64) -> bool {
        (self.coords - other.coords).amax() <= eps
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.coords.x.is_finite() && self.coords.y.is_finite()
    }
}

impl Default for Point2D {
    #[inline]
    fn default() -> Self {
        Self::origin()
    }
}

impl From<Point2<f64>> for Point2D {
    #[inline]
    fn from(p: Point2<f64>) -> Self {
        Self { coords: p.coords }
    }
}

impl From<Point2D> for Point2<f64> {
    #[inline]
    fn from(p: Point2D) -> Self {
        Point2::from(p.coords)
    }
}

impl From<[f64; 2]> for Point2D {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Add<Vector2D> for Point2D {
    type Output = Point2D;
    #[inline]
    fn add(self, rhs: Vector2D) -> Self::Output {
        Point2D {
            coords: self.coords + rhs.as_na(),
        }
    }
}

impl AddAssign<Vector2D> for Point2D {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2D) {
        self.coords += rhs.as_na();
    }
}

impl Sub for Point2D {
    type Output = Vector2D;
    /// Displacement from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Point2D) -> Self::Output {
        Vector2D::from(self.coords - rhs.coords)
    }
}

impl Sub<Vector2D> for Point2D {
    type Output = Point2D;
    #[inline]
    fn sub(self, rhs: Vector2D) -> Self::Output {
        Point2D {
            coords: self.coords - rhs.as_na(),
        }
    }
}

impl SubAssign<Vector2D> for Point2D {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.coords -= rhs.as_na();
    }
}

// Reflection and scaling about the origin.
impl Neg for Point2D {
    type Output = Point2D;
    #[inline]
    fn neg(self) -> Self::Output {
        Point2D {
            coords: -self.coords,
        }
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Point2D {
            coords: self.coords * rhs,
        }
    }
}

impl Mul<Point2D> for f64 {
    type Output = Point2D;
    #[inline]
    fn mul(self, rhs: Point2D) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Point2D {
    type Output = Point2D;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Point2D {
            coords: self.coords / rhs,
        }
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2},{:.2})", self.coords.x, self.coords.y)
    }
}
