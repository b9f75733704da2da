//! The complete pipeline: levels, faces, shading and shadows.
//!
//! # Example
//!
//! ```
//! use gemcut::shading::{halton_reflections, LightingSpec, DEFAULT_REFLECTION_COUNT};
//! use gemcut::shape::{CapStyle, Extent, ShapeSpec};
//! use gemcut::Gem;
//!
//! let shape = ShapeSpec {
//!     sides: 8,
//!     level_count: 3,
//!     cap: CapStyle::Pointy,
//!     ..ShapeSpec::default()
//! };
//! let lighting = LightingSpec::from_clock_position(2.0, 40.0, 25.0)
//!     .with_reflections(halton_reflections(DEFAULT_REFLECTION_COUNT, 3));
//!
//! let gem = Gem::build(&shape, &lighting, Extent::from_canvas(800.0, 800.0));
//! assert_eq!(gem.faces.len(), 8 * 2 + 8);
//! ```

use crate::primitives::Point2;
use crate::shading::{
    shadow_layers, LightingSpec, ShadedFace, ShadedTriangle, ShadingModel, ShadowLayer,
};
use crate::shape::{build_faces, build_levels, Extent, Level, ShapeSpec};
use log::debug;

/// Everything a renderer draws for one set of parameters.
///
/// Coordinates are relative to the shape center; the renderer adds its
/// own offset and converts luminosity to color.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gem {
    pub levels: Vec<Level>,
    pub faces: Vec<ShadedFace>,
    pub shadows: Vec<ShadowLayer>,
    pub extent: Extent,
    /// Light setting the faces were shaded with.
    pub shading: ShadingModel,
}

impl Gem {
    /// Builds and shades the gem described by `shape` and `lighting`.
    ///
    /// Pure: equal inputs give equal gems. A `level_count` above the
    /// shape's maximum is clamped; a degenerate shape gives an empty gem.
    pub fn build(shape: &ShapeSpec, lighting: &LightingSpec, extent: Extent) -> Self {
        let levels = build_levels(shape, extent);
        let faces = build_faces(&levels, shape.sides, shape.cap);

        let model = ShadingModel::new(lighting, extent.max_distance());
        let faces = model.shade_all(faces, lighting);

        let shadows = if levels.is_empty() {
            Vec::new()
        } else {
            shadow_layers(lighting.light_angle)
        };

        debug!(
            "built gem: {} sides, {} levels, {} faces, {} shadow layers",
            shape.sides,
            levels.len(),
            faces.len(),
            shadows.len()
        );

        Self {
            levels,
            faces,
            shadows,
            extent,
            shading: model,
        }
    }

    /// True when there is nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The outermost level, which casts the shadows.
    pub fn outline(&self) -> &[Point2<f64>] {
        self.levels.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every face tessellated `depth` times and shaded per sub-triangle,
    /// under the same light as [`Gem::faces`].
    pub fn subdivided(&self, depth: u32) -> Vec<ShadedTriangle> {
        self.faces
            .iter()
            .flat_map(|shaded| self.shading.shade_subdivided(&shaded.face, depth))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::halton_reflections;
    use crate::shape::{CapStyle, FaceKind};
    use crate::tessellate::Triangle2;
    use approx::assert_relative_eq;

    fn shape(sides: usize, level_count: usize, cap: CapStyle) -> ShapeSpec {
        ShapeSpec {
            sides,
            width_factor: 0.8,
            height_factor: 0.9,
            level_count,
            cap,
            ..ShapeSpec::default()
        }
    }

    fn lighting() -> LightingSpec {
        LightingSpec::from_clock_position(3.0, 45.0, 30.0)
            .with_reflections(halton_reflections(300, 2))
    }

    #[test]
    fn test_flat_gem_face_layout() {
        let gem = Gem::build(&shape(6, 3, CapStyle::Flat), &lighting(), Extent::default());
        assert_eq!(gem.levels.len(), 3);
        assert_eq!(gem.faces.len(), 13);
        assert_eq!(gem.shadows.len(), 5);
        assert_eq!(gem.outline(), gem.levels[0].as_slice());

        let cap = gem.faces.last().unwrap();
        assert_eq!(cap.face.kind, FaceKind::Cap);
        assert_eq!(cap.stops.len(), 7);
        assert_relative_eq!(
            cap.gradient_angle,
            lighting().light_angle + std::f64::consts::FRAC_PI_2
        );
    }

    #[test]
    fn test_pointy_gem_face_layout() {
        let gem = Gem::build(&shape(6, 3, CapStyle::Pointy), &lighting(), Extent::default());
        assert_eq!(gem.faces.len(), 18);
        assert!(gem.faces.iter().all(|f| f.stops.len() == 5));
    }

    #[test]
    fn test_build_is_deterministic() {
        let s = shape(9, 4, CapStyle::Flat);
        let a = Gem::build(&s, &lighting(), Extent::default());
        let b = Gem::build(&s, &lighting(), Extent::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_cap_is_brighter_than_dark_side() {
        let gem = Gem::build(&shape(8, 4, CapStyle::Flat), &lighting(), Extent::default());
        let cap = gem.faces.last().unwrap();
        let darkest = gem
            .faces
            .iter()
            .map(|f| f.light)
            .fold(f64::INFINITY, f64::min);
        assert!(cap.light > darkest);
        assert!(cap.elevation > 0.5);
    }

    #[test]
    fn test_excess_levels_are_clamped() {
        let gem = Gem::build(&shape(5, 20, CapStyle::Flat), &lighting(), Extent::default());
        assert_eq!(gem.levels.len(), 6);
        assert_eq!(gem.faces.len(), 5 * 5 + 1);
    }

    #[test]
    fn test_degenerate_gem_is_empty() {
        let gem = Gem::build(&shape(2, 3, CapStyle::Flat), &lighting(), Extent::default());
        assert!(gem.is_empty());
        assert!(gem.shadows.is_empty());
        assert!(gem.outline().is_empty());
    }

    #[test]
    fn test_subdivided_covers_faces() {
        let spec = lighting();
        let gem = Gem::build(&shape(6, 2, CapStyle::Flat), &spec, Extent::default());
        let triangles = gem.subdivided(1);

        // 6 quads (2 fan triangles each) and a hexagon cap (4), times 4.
        assert_eq!(triangles.len(), (6 * 2 + 4) * 4);

        let area: f64 = triangles.iter().map(|t| t.triangle.area()).sum();
        let expected: f64 = gem
            .faces
            .iter()
            .flat_map(|f| f.face.tessellate(0))
            .map(|t: Triangle2<f64>| t.area())
            .sum();
        assert_relative_eq!(area, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_subdivided_uses_build_lighting() {
        let dim = LightingSpec::from_clock_position(6.0, 30.0, 25.0);
        let gem = Gem::build(&shape(7, 3, CapStyle::Pointy), &dim, Extent::default());
        let model = ShadingModel::new(&dim, Extent::default().max_distance());
        assert_eq!(gem.shading, model);

        let parts = gem.subdivided(0);
        assert!(!parts.is_empty());
        for part in &parts {
            assert_eq!(part.light, model.light_at(part.triangle.centroid()));
            assert!(part.light <= 30.0);
        }
    }

    #[test]
    fn test_nan_factor_gives_empty_gem() {
        let nan = ShapeSpec {
            width_factor: f64::NAN,
            ..ShapeSpec::default()
        };
        let gem = Gem::build(&nan, &lighting(), Extent::default());
        assert!(gem.is_empty());
        assert!(gem.levels.is_empty());
        assert!(gem.shadows.is_empty());
    }
}
