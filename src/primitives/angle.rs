//! Scalar vector helpers used by the shading model.
//!
//! These mirror the `Vec2` methods but take plain components, which is how
//! the renderer-facing code tends to hold centroids and light directions.

use super::Vec2;
use num_traits::Float;

/// Length of the vector `(x, y)`.
#[inline]
pub fn length<F: Float>(x: F, y: F) -> F {
    Vec2::new(x, y).magnitude()
}

/// Unit vector in the direction of `(x, y)`; `(0, 0)` for a zero vector.
#[inline]
pub fn normalize<F: Float>(x: F, y: F) -> Vec2<F> {
    Vec2::new(x, y).normalize_or_zero()
}

/// Facing angle of a position: `atan2(-y, -x)`.
#[inline]
pub fn angle_of<F: Float>(x: F, y: F) -> F {
    Vec2::new(x, y).facing_angle()
}

/// `(-y, x) / |(x, y)|`, or `(0, 0)` for a zero vector.
#[inline]
pub fn normal<F: Float>(x: F, y: F) -> Vec2<F> {
    Vec2::new(x, y).unit_normal()
}

/// `(d·cos a, −d·sin a)`.
#[inline]
pub fn vector_from_polar<F: Float>(distance: F, angle: F) -> Vec2<F> {
    Vec2::from_polar(distance, angle)
}

/// Circular distance between two angles, scaled to `[0, 1]`.
///
/// The absolute difference is wrapped into `[0, π]` and divided by `π`, so
/// identical directions give 0 and opposite directions give 1.
///
/// # Example
///
/// ```
/// use gemcut::primitives::normalized_angle_difference;
/// use std::f64::consts::PI;
///
/// assert_eq!(normalized_angle_difference(0.0, PI), 1.0);
/// assert_eq!(normalized_angle_difference(0.0, PI / 2.0), 0.5);
/// ```
pub fn normalized_angle_difference<F: Float>(a: F, b: F) -> F {
    let pi = F::from(std::f64::consts::PI).unwrap();
    let tau = pi + pi;

    let mut diff = (a - b).abs() % tau;
    if diff > pi {
        diff = tau - diff;
    }
    diff / pi
}
