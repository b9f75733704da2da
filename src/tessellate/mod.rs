//! Recursive triangle subdivision.
//!
//! A polygon is fan-triangulated from its first vertex and every triangle
//! is then split into four through its edge midpoints, `depth` times over.
//! The result covers the input exactly and lets a renderer shade a face at
//! a finer resolution than its outline.
//!
//! # Example
//!
//! ```
//! use gemcut::tessellate::{tessellate, Triangle2};
//! use gemcut::Point2;
//!
//! let square: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! // Two fan triangles, each split into 4 twice.
//! let triangles = tessellate(&square, 2);
//! assert_eq!(triangles.len(), 2 * 16);
//! ```

use crate::primitives::Point2;
use num_traits::Float;

/// A triangle given by its three corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle2<F> {
    /// First vertex of the triangle.
    pub a: Point2<F>,
    /// Second vertex of the triangle.
    pub b: Point2<F>,
    /// Third vertex of the triangle.
    pub c: Point2<F>,
}

impl<F: Float> Triangle2<F> {
    /// Creates a new triangle from three points.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Signed area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> F {
        let two = F::from(2.0).unwrap();
        ((self.b.x - self.a.x) * (self.c.y - self.a.y)
            - (self.c.x - self.a.x) * (self.b.y - self.a.y))
            / two
    }

    /// Computes the area of the triangle.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the centroid of the triangle.
    pub fn centroid(&self) -> Point2<F> {
        let three = F::from(3.0).unwrap();
        Point2::new(
            (self.a.x + self.b.x + self.c.x) / three,
            (self.a.y + self.b.y + self.c.y) / three,
        )
    }

    /// Corners as an array, in winding order.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// Splits into four triangles through the edge midpoints.
    ///
    /// The three corner triangles keep the winding of `self`, as does the
    /// middle one.
    pub fn quadrisect(&self) -> [Self; 4] {
        let ab = self.a.midpoint(self.b);
        let bc = self.b.midpoint(self.c);
        let ca = self.c.midpoint(self.a);
        [
            Self::new(self.a, ab, ca),
            Self::new(ab, self.b, bc),
            Self::new(ca, bc, self.c),
            Self::new(ab, bc, ca),
        ]
    }
}

/// Subdivides a triangle `depth` times, giving `4^depth` triangles.
pub fn subdivide<F: Float>(triangle: Triangle2<F>, depth: u32) -> Vec<Triangle2<F>> {
    let mut out = Vec::with_capacity(4usize.pow(depth));
    subdivide_into(triangle, depth, &mut out);
    out
}

fn subdivide_into<F: Float>(triangle: Triangle2<F>, depth: u32, out: &mut Vec<Triangle2<F>>) {
    if depth == 0 {
        out.push(triangle);
        return;
    }
    for child in triangle.quadrisect() {
        subdivide_into(child, depth - 1, out);
    }
}

/// Fan-triangulates `polygon` from its first vertex, then subdivides each
/// triangle `depth` times.
///
/// The fan is exact for convex polygons, which is every face the shape
/// builder produces. Fewer than three vertices give an empty result.
pub fn tessellate<F: Float>(polygon: &[Point2<F>], depth: u32) -> Vec<Triangle2<F>> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let apex = polygon[0];
    let mut out = Vec::with_capacity((polygon.len() - 2) * 4usize.pow(depth));
    for edge in polygon[1..].windows(2) {
        subdivide_into(Triangle2::new(apex, edge[0], edge[1]), depth, &mut out);
    }
    out
}
