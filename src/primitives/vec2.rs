//! 2D vector type for directions and offsets.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Builds a vector from a distance and an angle.
    ///
    /// The y component is negated so that positive angles turn towards
    /// negative y, matching a y-down drawing surface.
    #[inline]
    pub fn from_polar(distance: F, angle: F) -> Self {
        Self {
            x: distance * angle.cos(),
            y: -distance * angle.sin(),
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized (unit length) vector.
    ///
    /// Returns `None` if the vector has zero length.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::zero() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Returns a normalized vector, or the zero vector if `self` has zero length.
    #[inline]
    pub fn normalize_or_zero(self) -> Self {
        self.normalize().unwrap_or_else(Self::zero)
    }

    /// Returns a vector perpendicular to this one (rotated 90 degrees counter-clockwise).
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Unit-length perpendicular, or the zero vector for a zero input.
    #[inline]
    pub fn unit_normal(self) -> Self {
        self.perpendicular().normalize_or_zero()
    }

    /// Angle of the direction pointing away from this vector.
    ///
    /// Computed as `atan2(-y, -x)`. For a position relative to the shape
    /// center this is the direction the surface at that position faces.
    #[inline]
    pub fn facing_angle(self) -> F {
        (-self.y).atan2(-self.x)
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_magnitude() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        let n = v.normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-10);
        assert_relative_eq!(n.y, 0.8, epsilon = 1e-10);
    }

    #[test]
    fn test_normalize_zero() {
        let v: Vec2<f64> = Vec2::zero();
        assert!(v.normalize().is_none());
        assert_eq!(v.normalize_or_zero(), Vec2::zero());
    }

    #[test]
    fn test_unit_normal() {
        let v: Vec2<f64> = Vec2::new(0.0, 2.0);
        let n = v.unit_normal();
        assert_relative_eq!(n.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(n.y, 0.0, epsilon = 1e-12);
        assert_eq!(n.dot(v), 0.0);

        assert_eq!(Vec2::<f64>::zero().unit_normal(), Vec2::zero());
    }

    #[test]
    fn test_facing_angle() {
        // A point to the left of the center faces along +x.
        let left: Vec2<f64> = Vec2::new(-1.0, 0.0);
        assert_relative_eq!(left.facing_angle(), 0.0, epsilon = 1e-12);

        let right: Vec2<f64> = Vec2::new(1.0, 0.0);
        assert_relative_eq!(right.facing_angle().abs(), PI, epsilon = 1e-12);

        let below: Vec2<f64> = Vec2::new(0.0, -1.0);
        assert_relative_eq!(below.facing_angle(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_from_polar() {
        let v: Vec2<f64> = Vec2::from_polar(2.0, FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, -2.0, epsilon = 1e-12);

        let w: Vec2<f64> = Vec2::from_polar(3.0, 0.0);
        assert_eq!(w, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }
}
