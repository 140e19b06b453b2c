//! Displacements in the plane (cartesian storage, polar views).
//!
//! - Rotation uses the plain rotation matrix, `x' = x cos θ − y sin θ`,
//!   `y' = x sin θ + y cos θ`; `rotate_quarter_turns` is the exact variant.
//! - Angles are radians in (-π, π], measured counterclockwise from +x.
//!
//! Code cross-refs: `polar::Polar`, `point::Point2D`

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::point::Point2D;
use super::polar::Polar;
use super::util::cross;

/// A displacement `(x, y)` with a magnitude and a direction.
///
/// Equality is exact on both components; use `approx_eq` for tolerance checks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector2D {
    v: Vector2<f64>,
}

impl Vector2D {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            v: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self {
            v: Vector2::zeros(),
        }
    }

    /// `(r cos θ, r sin θ)`. A negative `r` points the opposite way.
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.v.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.v.y
    }

    #[inline]
    pub(crate) fn as_na(&self) -> Vector2<f64> {
        self.v
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.v.x, self.v.y]
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.v.x == 0.0 && self.v.y == 0.0
    }

    /// `sqrt(x² + y²)`.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.v.x * self.v.x + self.v.y * self.v.y).sqrt()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.v.x * self.v.x + self.v.y * self.v.y
    }

    /// `atan2(y, x)` folded into (-π, π]; the zero vector has angle 0.
    pub fn angle(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let t = self.v.y.atan2(self.v.x);
        if t == -std::f64::consts::PI {
            std::f64::consts::PI
        } else {
            t
        }
    }

    pub fn to_polar(&self) -> Polar {
        Polar::from_parts(self.length(), self.angle())
    }

    #[inline]
    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.v.dot(&other.v)
    }

    /// z-component of the 3D cross product; positive when `other` is
    /// counterclockwise of `self`.
    #[inline]
    pub fn cross(&self, other: &Vector2D) -> f64 {
        cross(self.v, other.v)
    }

    /// Same direction, length 1. The zero vector is returned unchanged.
    pub fn unit(&self) -> Vector2D {
        let len = self.length();
        if len == 0.0 {
            *self
        } else {
            *self / len
        }
    }

    /// Smallest unsigned angle to `other`, in [0, π]. 0 if either is zero.
    pub fn angle_with(&self, other: &Vector2D) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        self.cross(other).abs().atan2(self.dot(other))
    }

    /// Counterclockwise rotation by `theta` radians about the origin.
    pub fn rotate(&self, theta: f64) -> Vector2D {
        let (s, c) = theta.sin_cos();
        let (x, y) = (self.v.x, self.v.y);
        Vector2D::new(x * c - y * s, x * s + y * c)
    }

    /// Exact rotation by `k · 90°` (counterclockwise for positive `k`).
    pub fn rotate_quarter_turns(&self, k: i32) -> Vector2D {
        let (x, y) = (self.v.x, self.v.y);
        match k.rem_euclid(4) {
            0 => *self,
            1 => Vector2D::new(-y, x),
            2 => Vector2D::new(-x, -y),
            _ => Vector2D::new(y, -x),
        }
    }

    /// One counterclockwise quarter turn.
    #[inline]
    pub fn perp(&self) -> Vector2D {
        self.rotate_quarter_turns(1)
    }

    /// `None` when `rhs == 0`.
    #[inline]
    pub fn checked_div(&self, rhs: f64) -> Option<Vector2D> {
        if rhs == 0.0 {
            None
        } else {
            Some(*self / rhs)
        }
    }

    /// Max-abs component comparison.
    #[inline]
    pub fn approx_eq(&self, other: &Vector2D, eps: f64) -> bool {
        (self.v - other.v).amax() <= eps
    }
}

impl Default for Vector2D {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<Vector2<f64>> for Vector2D {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { v }
    }
}

impl From<Vector2D> for Vector2<f64> {
    #[inline]
    fn from(v: Vector2D) -> Self {
        v.v
    }
}

impl From<[f64; 2]> for Vector2D {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Polar> for Vector2D {
    #[inline]
    fn from(p: Polar) -> Self {
        p.to_cartesian()
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn add(self, rhs: Vector2D) -> Self::Output {
        Vector2D { v: self.v + rhs.v }
    }
}

impl Add<Point2D> for Vector2D {
    type Output = Point2D;
    #[inline]
    fn add(self, rhs: Point2D) -> Self::Output {
        rhs + self
    }
}

impl AddAssign for Vector2D {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2D) {
        self.v += rhs.v;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn sub(self, rhs: Vector2D) -> Self::Output {
        Vector2D { v: self.v - rhs.v }
    }
}

impl SubAssign for Vector2D {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.v -= rhs.v;
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2D { v: -self.v }
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Vector2D { v: self.v * rhs }
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;
    #[inline]
    fn mul(self, rhs: Vector2D) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f64> for Vector2D {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.v *= rhs;
    }
}

/// IEEE division; see `checked_div` for a zero-aware variant.
impl Div<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Vector2D { v: self.v / rhs }
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.2},{:.2}>", self.v.x, self.v.y)
    }
}
