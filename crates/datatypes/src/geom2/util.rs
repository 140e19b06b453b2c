use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

/// Signed area of the parallelogram spanned by (a, b), i.e. `det [a b]`.
/// Positive for a→b counterclockwise.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Wrap an angle (radians) into (-π, π].
#[inline]
pub(crate) fn normalize_angle(theta: f64) -> f64 {
    if theta > -PI && theta <= PI {
        return theta;
    }
    let t = theta.rem_euclid(TAU);
    if t > PI {
        t - TAU
    } else {
        t
    }
}
