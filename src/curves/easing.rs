//! Cubic Bézier easing curves.
//!
//! An easing maps progress `x ∈ [0, 1]` to warped progress `y ∈ [0, 1]`
//! along the Bézier curve `(0,0) → (x1,y1) → (x2,y2) → (1,1)`, the same
//! definition as CSS `cubic-bezier()` timing functions. Since the curve is
//! given parametrically, `x` is first inverted to the curve parameter with
//! Newton–Raphson, falling back to binary subdivision where the slope is
//! too flat for Newton to be reliable.

use num_traits::Float;

const NEWTON_ITERATIONS: usize = 4;
const NEWTON_MIN_SLOPE: f64 = 0.001;
const SUBDIVISION_PRECISION: f64 = 0.000_000_1;
const SUBDIVISION_MAX_ITERATIONS: usize = 10;
const SAMPLE_TABLE_SIZE: usize = 11;

/// A monotone easing function defined by two control points.
///
/// The value is a pure function of its four control scalars; the sample
/// table is derived from them on construction and never changes.
///
/// # Example
///
/// ```
/// use gemcut::curves::CubicBezierEasing;
///
/// let easing = CubicBezierEasing::new(0.0_f64, 0.5, 1.0, 0.5);
/// assert_eq!(easing.ease(0.0), 0.0);
/// assert_eq!(easing.ease(1.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezierEasing<F> {
    x1: F,
    y1: F,
    x2: F,
    y2: F,
    samples: [F; SAMPLE_TABLE_SIZE],
}

impl<F: Float> CubicBezierEasing<F> {
    /// Creates an easing from the control points `(x1, y1)` and `(x2, y2)`.
    ///
    /// `x1` and `x2` are clamped to `[0, 1]` so the curve stays a function of `x`.
    pub fn new(x1: F, y1: F, x2: F, y2: F) -> Self {
        let x1 = clamp_unit(x1);
        let x2 = clamp_unit(x2);
        let step = F::one() / F::from(SAMPLE_TABLE_SIZE - 1).unwrap();

        let mut samples = [F::zero(); SAMPLE_TABLE_SIZE];
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = bezier(F::from(i).unwrap() * step, x1, x2);
        }

        Self {
            x1,
            y1,
            x2,
            y2,
            samples,
        }
    }

    /// The gem profile: `(0,0) → (0, outside_spread) → (1, center_spread) → (1,1)`.
    #[inline]
    pub fn spread(outside_spread: F, center_spread: F) -> Self {
        Self::new(F::zero(), outside_spread, F::one(), center_spread)
    }

    /// Returns true if the curve is the identity line.
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    /// Eased progress for `x`, clamped to `[0, 1]`.
    pub fn ease(&self, x: F) -> F {
        let x = clamp_unit(x);
        if self.is_linear() || x == F::zero() || x == F::one() {
            return x;
        }
        bezier(self.parameter_for_x(x), self.y1, self.y2)
    }

    fn parameter_for_x(&self, x: F) -> F {
        let last = SAMPLE_TABLE_SIZE - 1;
        let step = F::one() / F::from(last).unwrap();

        let mut interval_start = F::zero();
        let mut current = 1;
        while current != last && self.samples[current] <= x {
            interval_start = interval_start + step;
            current += 1;
        }
        current -= 1;

        let span = self.samples[current + 1] - self.samples[current];
        let dist = if span > F::zero() {
            (x - self.samples[current]) / span
        } else {
            F::zero()
        };
        let guess = interval_start + dist * step;

        let slope = bezier_slope(guess, self.x1, self.x2);
        if slope >= F::from(NEWTON_MIN_SLOPE).unwrap() {
            self.newton_raphson(x, guess)
        } else if slope == F::zero() {
            guess
        } else {
            self.binary_subdivide(x, interval_start, interval_start + step)
        }
    }

    fn newton_raphson(&self, x: F, mut t: F) -> F {
        for _ in 0..NEWTON_ITERATIONS {
            let slope = bezier_slope(t, self.x1, self.x2);
            if slope == F::zero() {
                return t;
            }
            let current_x = bezier(t, self.x1, self.x2) - x;
            t = t - current_x / slope;
        }
        t
    }

    fn binary_subdivide(&self, x: F, mut a: F, mut b: F) -> F {
        let two = F::one() + F::one();
        let precision = F::from(SUBDIVISION_PRECISION).unwrap();
        let mut t = a;

        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            t = a + (b - a) / two;
            let current_x = bezier(t, self.x1, self.x2) - x;
            if current_x.abs() <= precision {
                break;
            }
            if current_x > F::zero() {
                b = t;
            } else {
                a = t;
            }
        }

        t
    }
}

/// One coordinate of the curve with endpoints fixed at 0 and 1.
#[inline]
fn bezier<F: Float>(t: F, c1: F, c2: F) -> F {
    let three = F::from(3.0).unwrap();
    let a = F::one() - three * c2 + three * c1;
    let b = three * c2 - F::from(6.0).unwrap() * c1;
    let c = three * c1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope<F: Float>(t: F, c1: F, c2: F) -> F {
    let three = F::from(3.0).unwrap();
    let two = F::from(2.0).unwrap();
    let a = F::one() - three * c2 + three * c1;
    let b = three * c2 - F::from(6.0).unwrap() * c1;
    let c = three * c1;
    three * a * t * t + two * b * t + c
}

#[inline]
fn clamp_unit<F: Float>(x: F) -> F {
    x.max(F::zero()).min(F::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints() {
        let e = CubicBezierEasing::spread(0.3_f64, 0.8);
        assert_eq!(e.ease(0.0), 0.0);
        assert_eq!(e.ease(1.0), 1.0);
        assert_eq!(e.ease(-2.0), 0.0);
        assert_eq!(e.ease(3.0), 1.0);
    }

    #[test]
    fn test_linear() {
        let e = CubicBezierEasing::new(0.25_f64, 0.25, 0.75, 0.75);
        assert!(e.is_linear());
        for &x in &[0.1, 0.33, 0.9] {
            assert_eq!(e.ease(x), x);
        }
    }

    #[test]
    fn test_symmetric_curve_passes_through_center() {
        // Point-symmetric about (0.5, 0.5).
        let e = CubicBezierEasing::spread(0.5_f64, 0.5);
        assert_relative_eq!(e.ease(0.5), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_matches_parametric_curve() {
        let e = CubicBezierEasing::spread(0.2_f64, 0.9);
        for i in 1..20 {
            let t = i as f64 / 20.0;
            let x = bezier(t, 0.0, 1.0);
            let y = bezier(t, 0.2, 0.9);
            assert_relative_eq!(e.ease(x), y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_monotone_for_gem_profiles() {
        for &(outside, center) in &[(0.1, 0.1), (0.1, 0.9), (0.9, 0.1), (0.5, 0.7), (0.0, 0.0)] {
            let e = CubicBezierEasing::spread(outside, center);
            let mut prev = 0.0_f64;
            for i in 1..=50 {
                let y = e.ease(i as f64 / 50.0);
                assert!(y >= prev - 1e-6, "profile ({outside}, {center}) dipped at {i}");
                prev = y;
            }
        }
    }
}
