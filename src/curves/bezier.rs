//! Cubic Bézier curves and chord-length resampling.
//!
//! Curve outlines are built by evaluating a cubic on a uniform parameter
//! grid and then picking samples that are roughly evenly spaced along the
//! resulting polyline. Unlike [`ArcLengthEllipse`](super::ArcLengthEllipse)
//! this never inverts the arc length; it snaps to whichever existing sample
//! is closest to the ideal distance.

use crate::primitives::Point2;
use num_traits::Float;

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve starts at `p0`, is influenced by `p1` and `p2`, and ends at `p3`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// First control point
    pub p1: Point2<F>,
    /// Second control point
    pub p2: Point2<F>,
    /// End point
    pub p3: Point2<F>,
}

impl<F: Float> CubicBezier2<F> {
    /// Creates a new cubic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at parameter `t` (0 to 1) with the Bernstein blend.
    ///
    /// The endpoints go through the same formula as interior parameters so
    /// that joined curves meet at bit-identical coordinates.
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let mt = one - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;
        let t2 = t * t;
        let t3 = t2 * t;
        let three = one + one + one;

        Point2::new(
            mt3 * self.p0.x
                + three * mt2 * t * self.p1.x
                + three * mt * t2 * self.p2.x
                + t3 * self.p3.x,
            mt3 * self.p0.y
                + three * mt2 * t * self.p1.y
                + three * mt * t2 * self.p2.y
                + t3 * self.p3.y,
        )
    }

    /// Samples the curve at `count` parameters spaced uniformly in `t`.
    ///
    /// Both endpoints are included when `count >= 2`. Spacing along the curve
    /// is not uniform; use [`resample_by_chord_length`] for that.
    pub fn sample_dense(&self, count: usize) -> Vec<Point2<F>> {
        match count {
            0 => Vec::new(),
            1 => vec![self.eval(F::zero())],
            _ => {
                let last = F::from(count - 1).unwrap();
                (0..count)
                    .map(|i| self.eval(F::from(i).unwrap() / last))
                    .collect()
            }
        }
    }
}

/// Total length of a polyline (sum of consecutive Euclidean distances).
pub fn polyline_length<F: Float>(points: &[Point2<F>]) -> F {
    points
        .windows(2)
        .fold(F::zero(), |acc, w| acc + w[0].distance(w[1]))
}

/// Picks roughly evenly spaced samples from a dense polyline.
///
/// The target spacing is `polyline_length / target_count`. Walking the
/// polyline, a running distance is accumulated; whenever adding the next
/// step would reach the target spacing, whichever of the two straddling
/// samples lies closer to the ideal distance is emitted and the running
/// distance restarts from zero.
///
/// The first input point is always the first output point. Because every
/// emission snaps to an existing sample and the remainder is discarded, the
/// result can hold a few more or fewer points than `target_count`. A zero
/// `target_count` or an empty input gives an empty result.
///
/// # Example
///
/// ```
/// use gemcut::curves::resample_by_chord_length;
/// use gemcut::Point2;
///
/// let line: Vec<Point2<f64>> = (0..=100).map(|i| Point2::new(i as f64, 0.0)).collect();
/// let picked = resample_by_chord_length(&line, 10);
/// assert_eq!(picked[0], line[0]);
/// assert_eq!(picked.len(), 11);
/// ```
pub fn resample_by_chord_length<F: Float>(
    points: &[Point2<F>],
    target_count: usize,
) -> Vec<Point2<F>> {
    if points.is_empty() || target_count == 0 {
        return Vec::new();
    }

    let segment_length = polyline_length(points) / F::from(target_count).unwrap();

    let mut result = Vec::with_capacity(target_count + 1);
    let mut accumulated = F::zero();
    let mut previous = points[0];
    result.push(previous);

    for &current in &points[1..] {
        let step = previous.distance(current);
        let reached = accumulated + step;

        if reached >= segment_length {
            if reached - segment_length < segment_length - accumulated {
                result.push(current);
            } else {
                result.push(previous);
            }
            accumulated = F::zero();
        } else {
            accumulated = reached;
        }

        previous = current;
    }

    result
}
