//! Concentric levels and the faces that connect them.
//!
//! Level 0 is the outline. Each following level is a smaller ellipse whose
//! radii shrink along an easing profile, sampled with the same number of
//! evenly spaced points. Corresponding indices across levels are joined
//! into quadrilateral wall faces; the innermost level is closed by a cap.

use super::spec::{CapStyle, Extent, ShapeSpec};
use crate::curves::{evenly_spaced_ellipse_points, CubicBezierEasing};
use crate::primitives::Point2;
use crate::tessellate::{tessellate, Triangle2};
use log::{trace, warn};

/// One concentric ring of `sides` points in angular order.
pub type Level = Vec<Point2<f64>>;

/// Where a face sits on the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceKind {
    /// Quad between level `level` and `level + 1`, starting at index `side`.
    Wall { level: usize, side: usize },
    /// The innermost level as a single flat polygon.
    Cap,
    /// Triangle from the innermost edge starting at `side` to the apex.
    CapTriangle { side: usize },
}

/// A polygon of the shape with consistent winding.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Face {
    pub kind: FaceKind,
    pub vertices: Vec<Point2<f64>>,
}

impl Face {
    /// Creates a face.
    #[inline]
    pub fn new(kind: FaceKind, vertices: Vec<Point2<f64>>) -> Self {
        Self { kind, vertices }
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Point2<f64> {
        Point2::mean(&self.vertices).unwrap_or_else(Point2::origin)
    }

    /// True for the flat cap, which is lit as a whole rather than by orientation.
    #[inline]
    pub fn is_flat_cap(&self) -> bool {
        self.kind == FaceKind::Cap
    }

    /// Triangles covering this face, subdivided `depth` times.
    pub fn tessellate(&self, depth: u32) -> Vec<Triangle2<f64>> {
        tessellate(&self.vertices, depth)
    }
}

/// Builds the concentric levels described by `spec` inside `extent`.
///
/// Level `i` is scaled by `factor − ease(i / max_levels) · available_space`
/// on each axis. The easing input is normalized by `max_levels`, not by the
/// level count, so adding levels inserts rings without moving existing ones.
///
/// A `level_count` above [`ShapeSpec::max_levels`] is clamped with a
/// warning. Fewer than 3 sides, a factor or extent that is not finite, or
/// no usable level, gives no levels.
pub fn build_levels(spec: &ShapeSpec, extent: Extent) -> Vec<Level> {
    if spec.sides < 3 {
        warn!("cannot build levels for {} sides", spec.sides);
        return Vec::new();
    }
    if let Some((name, value)) = spec.non_finite_factor() {
        warn!("cannot build levels with {name} = {value}");
        return Vec::new();
    }
    if !extent.is_finite() {
        warn!(
            "cannot build levels inside extent {}x{}",
            extent.max_width, extent.max_height
        );
        return Vec::new();
    }

    let max_levels = spec.max_levels();
    if spec.level_count > max_levels {
        warn!(
            "level count {} exceeds the maximum of {} for factors {}x{}; clamping",
            spec.level_count, max_levels, spec.width_factor, spec.height_factor
        );
    }
    let count = spec.effective_level_count();
    if count == 0 {
        warn!(
            "scale factors {}x{} leave no room for levels",
            spec.width_factor, spec.height_factor
        );
        return Vec::new();
    }

    let easing = CubicBezierEasing::spread(spec.outside_spread, spec.center_spread);
    let available = spec.available_space();
    let angle = spec.angle_offset();

    (0..count)
        .map(|i| {
            let shrink = easing.ease(i as f64 / max_levels as f64) * available;
            let width = extent.max_width * (spec.width_factor - shrink);
            let height = extent.max_height * (spec.height_factor - shrink);
            trace!("level {i}: radii {width:.3} x {height:.3}");
            evenly_spaced_ellipse_points(width, height, spec.sides, angle)
        })
        .collect()
}

/// Connects `levels` into wall faces and closes the innermost level.
///
/// Wall `(i, j)` is `[L_i[j], L_{i+1}[j], L_{i+1}[j+1], L_i[j+1]]` with
/// indices taken modulo `sides`. A flat cap is the innermost level itself;
/// a pointy cap is `sides` triangles `[L_n[j], apex, L_n[j+1]]` with the apex
/// at the origin, wound the same way as the walls.
///
/// Walls come first, in level-major order, followed by the cap face(s).
/// Returns nothing when `sides < 3` or a level does not hold `sides` points.
pub fn build_faces(levels: &[Level], sides: usize, cap: CapStyle) -> Vec<Face> {
    if sides < 3 || levels.is_empty() {
        return Vec::new();
    }
    if let Some(bad) = levels.iter().position(|level| level.len() != sides) {
        warn!(
            "level {bad} has {} points, expected {sides}",
            levels[bad].len()
        );
        return Vec::new();
    }

    let cap_faces = match cap {
        CapStyle::Flat => 1,
        CapStyle::Pointy => sides,
    };
    let mut faces = Vec::with_capacity((levels.len() - 1) * sides + cap_faces);

    for (level, pair) in levels.windows(2).enumerate() {
        let (outer, inner) = (&pair[0], &pair[1]);
        for side in 0..sides {
            let next = (side + 1) % sides;
            faces.push(Face::new(
                FaceKind::Wall { level, side },
                vec![outer[side], inner[side], inner[next], outer[next]],
            ));
        }
    }

    let innermost = &levels[levels.len() - 1];
    match cap {
        CapStyle::Flat => faces.push(Face::new(FaceKind::Cap, innermost.clone())),
        CapStyle::Pointy => {
            let apex = Point2::origin();
            for side in 0..sides {
                let next = (side + 1) % sides;
                faces.push(Face::new(
                    FaceKind::CapTriangle { side },
                    vec![innermost[side], apex, innermost[next]],
                ));
            }
        }
    }

    faces
}
