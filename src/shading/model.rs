//! Per-face brightness from orientation and simulated elevation.
//!
//! A face is dimmed by how far its centroid direction turns away from the
//! light, scaled down the closer the face sits to the center of the shape
//! (the "top" of the gem). No light transport is simulated; reflections are
//! faked with jittered gradient stops.

use super::lighting::LightingSpec;
use crate::primitives::{normalized_angle_difference, Point2};
use crate::shape::Face;
use crate::tessellate::Triangle2;
use std::f64::consts::FRAC_PI_2;

/// One color stop of a face's linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Position along the gradient, in `[0, 1]`.
    pub offset: f64,
    /// Luminosity at this stop.
    pub luminosity: f64,
}

/// A face with everything a renderer needs to fill it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadedFace {
    pub face: Face,
    pub centroid: Point2<f64>,
    /// Facing angle of the centroid.
    pub centroid_angle: f64,
    /// 0 at the outline, 1 at the center.
    pub elevation: f64,
    /// 0 for a fully lit face, 1 for the darkest.
    pub dimming: f64,
    /// Base luminosity of the face.
    pub light: f64,
    /// Rotation of the gradient, in radians.
    pub gradient_angle: f64,
    pub stops: Vec<GradientStop>,
}

/// A sub-triangle of a tessellated face with its own luminosity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadedTriangle {
    pub triangle: Triangle2<f64>,
    pub light: f64,
}

/// Dimming and luminosity for one light setting and shape size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadingModel {
    pub light_angle: f64,
    pub luminosity: f64,
    pub min_luminosity: f64,
    /// Distance from the center at which elevation reaches 0.
    pub max_distance: f64,
}

impl ShadingModel {
    /// Creates a model for `lighting` on a shape whose largest radius is `max_distance`.
    pub fn new(lighting: &LightingSpec, max_distance: f64) -> Self {
        Self {
            light_angle: lighting.light_angle,
            luminosity: lighting.luminosity,
            min_luminosity: lighting.min_luminosity(),
            max_distance,
        }
    }

    /// `(max_distance − |p|) / max_distance`, clamped to `[0, 1]`.
    ///
    /// A non-positive `max_distance` treats everything as the top.
    pub fn elevation(&self, p: Point2<f64>) -> f64 {
        if self.max_distance <= 0.0 {
            return 1.0;
        }
        let distance = p.to_vec().magnitude();
        ((self.max_distance - distance) / self.max_distance).clamp(0.0, 1.0)
    }

    /// Angular distance from the light, reduced by elevation.
    pub fn dimming(&self, centroid_angle: f64, elevation: f64) -> f64 {
        normalized_angle_difference(self.light_angle, centroid_angle) * (1.0 - elevation)
    }

    /// `luminosity − (luminosity − min_luminosity) · dimming`.
    #[inline]
    pub fn light(&self, dimming: f64) -> f64 {
        self.luminosity - (self.luminosity - self.min_luminosity) * dimming
    }

    /// Luminosity of a surface element centered at `p`.
    pub fn light_at(&self, p: Point2<f64>) -> f64 {
        let angle = p.to_vec().facing_angle();
        self.light(self.dimming(angle, self.elevation(p)))
    }

    /// Shades face number `index` of a shape.
    ///
    /// The flat cap's gradient is turned a quarter turn from the light
    /// direction; every other face is turned a quarter turn from its own
    /// centroid direction. Inner stop `k` reads reflection
    /// `index · stop_count + k`, where `stop_count` is the number of inner
    /// stops for this kind of face.
    pub fn shade(&self, index: usize, face: Face, lighting: &LightingSpec) -> ShadedFace {
        let centroid = face.centroid();
        let centroid_angle = centroid.to_vec().facing_angle();
        let elevation = self.elevation(centroid);
        let dimming = self.dimming(centroid_angle, elevation);
        let light = self.light(dimming);

        let (gradient_angle, inner) = if face.is_flat_cap() {
            (self.light_angle + FRAC_PI_2, &lighting.gradient.cap_stops)
        } else {
            (centroid_angle + FRAC_PI_2, &lighting.gradient.wall_stops)
        };

        let jitter = lighting.gradient.jitter;
        let mut stops = Vec::with_capacity(inner.len() + 2);
        stops.push(GradientStop {
            offset: 0.0,
            luminosity: light,
        });
        for (k, &offset) in inner.iter().enumerate() {
            let shift = lighting
                .reflections
                .get(index * inner.len() + k)
                .map_or(0.0, |r| -jitter + r * 2.0 * jitter);
            stops.push(GradientStop {
                offset,
                luminosity: light + shift,
            });
        }
        stops.push(GradientStop {
            offset: 1.0,
            luminosity: light,
        });

        ShadedFace {
            face,
            centroid,
            centroid_angle,
            elevation,
            dimming,
            light,
            gradient_angle,
            stops,
        }
    }

    /// Shades every face in order.
    pub fn shade_all(&self, faces: Vec<Face>, lighting: &LightingSpec) -> Vec<ShadedFace> {
        faces
            .into_iter()
            .enumerate()
            .map(|(index, face)| self.shade(index, face, lighting))
            .collect()
    }

    /// Shades each sub-triangle of `face` by its own centroid.
    pub fn shade_subdivided(&self, face: &Face, depth: u32) -> Vec<ShadedTriangle> {
        face.tessellate(depth)
            .into_iter()
            .map(|triangle| ShadedTriangle {
                light: self.light_at(triangle.centroid()),
                triangle,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::FaceKind;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn wall(vertices: Vec<Point2<f64>>) -> Face {
        Face::new(FaceKind::Wall { level: 0, side: 0 }, vertices)
    }

    /// A small quad centered on `(x, y)`.
    fn wall_at(x: f64, y: f64) -> Face {
        wall(vec![
            Point2::new(x - 1.0, y - 1.0),
            Point2::new(x + 1.0, y - 1.0),
            Point2::new(x + 1.0, y + 1.0),
            Point2::new(x - 1.0, y + 1.0),
        ])
    }

    fn lighting(light_angle: f64) -> LightingSpec {
        LightingSpec::new(light_angle, 40.0, 30.0)
    }

    #[test]
    fn test_elevation() {
        let model = ShadingModel::new(&lighting(0.0), 100.0);
        assert_eq!(model.elevation(Point2::origin()), 1.0);
        assert_eq!(model.elevation(Point2::new(0.0, 100.0)), 0.0);
        assert_relative_eq!(model.elevation(Point2::new(30.0, 40.0)), 0.5, epsilon = 1e-12);
        assert_eq!(model.elevation(Point2::new(300.0, 0.0)), 0.0);

        let flat = ShadingModel::new(&lighting(0.0), 0.0);
        assert_eq!(flat.elevation(Point2::new(5.0, 5.0)), 1.0);
    }

    #[test]
    fn test_face_toward_light_is_brightest() {
        // Light at angle 0; a face left of center faces angle 0.
        let spec = lighting(0.0);
        let model = ShadingModel::new(&spec, 100.0);

        let lit = model.shade(0, wall_at(-100.0, 0.0), &spec);
        assert_relative_eq!(lit.centroid_angle, 0.0, epsilon = 1e-12);
        assert_relative_eq!(lit.dimming, 0.0, epsilon = 1e-12);
        assert_relative_eq!(lit.light, 40.0, epsilon = 1e-9);

        let dark = model.shade(1, wall_at(100.0, 0.0), &spec);
        assert_relative_eq!(dark.dimming, 1.0, epsilon = 1e-12);
        assert_relative_eq!(dark.light, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_elevation_softens_dimming() {
        let spec = lighting(0.0);
        let model = ShadingModel::new(&spec, 100.0);

        // Opposite the light, halfway to the center.
        let mid = model.shade(0, wall_at(50.0, 0.0), &spec);
        assert_relative_eq!(mid.elevation, 0.5, epsilon = 1e-12);
        assert_relative_eq!(mid.dimming, 0.5, epsilon = 1e-12);
        assert_relative_eq!(mid.light, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_contrast_floor() {
        let spec = LightingSpec::new(0.0, 30.0, 50.0);
        let model = ShadingModel::new(&spec, 100.0);
        let dark = model.shade(0, wall_at(100.0, 0.0), &spec);
        assert_relative_eq!(dark.light, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gradient_angles() {
        let spec = lighting(1.0);
        let model = ShadingModel::new(&spec, 100.0);

        let side = model.shade(0, wall_at(0.0, 80.0), &spec);
        assert_relative_eq!(side.gradient_angle, side.centroid_angle + FRAC_PI_2, epsilon = 1e-12);

        let cap = Face::new(FaceKind::Cap, wall_at(3.0, 2.0).vertices);
        let top = model.shade(1, cap, &spec);
        assert_relative_eq!(top.gradient_angle, 1.0 + FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_stops_without_reflections_are_flat() {
        let spec = lighting(0.0);
        let model = ShadingModel::new(&spec, 100.0);
        let shaded = model.shade(0, wall_at(0.0, 50.0), &spec);

        let offsets: Vec<f64> = shaded.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.2, 0.5, 0.7, 1.0]);
        assert!(shaded.stops.iter().all(|s| s.luminosity == shaded.light));
    }

    #[test]
    fn test_reflection_indexing_and_jitter() {
        // Face 1 with 3 wall stops reads reflections 3, 4 and 5.
        let reflections = vec![0.9, 0.9, 0.9, 0.0, 0.5, 1.0];
        let spec = lighting(0.0).with_reflections(reflections);
        let model = ShadingModel::new(&spec, 100.0);
        let shaded = model.shade(1, wall_at(0.0, 50.0), &spec);

        let light = shaded.light;
        let inner: Vec<f64> = shaded.stops[1..4].iter().map(|s| s.luminosity).collect();
        assert_relative_eq!(inner[0], light - 10.0, epsilon = 1e-9);
        assert_relative_eq!(inner[1], light, epsilon = 1e-9);
        assert_relative_eq!(inner[2], light + 10.0, epsilon = 1e-9);
        assert_eq!(shaded.stops[0].luminosity, light);
        assert_eq!(shaded.stops[4].luminosity, light);
    }

    #[test]
    fn test_cap_uses_cap_stops() {
        let spec = lighting(0.0).with_reflections(vec![0.0; 10]);
        let model = ShadingModel::new(&spec, 100.0);
        let cap = Face::new(FaceKind::Cap, wall_at(0.0, 0.0).vertices);
        let shaded = model.shade(1, cap, &spec);

        assert_eq!(shaded.stops.len(), 7);
        // Reflections 5..10 exist and are zero: every inner stop shifts down by 10.
        for stop in &shaded.stops[1..6] {
            assert_relative_eq!(stop.luminosity, shaded.light - 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_dimming_stays_in_unit_range() {
        let spec = lighting(2.5);
        let model = ShadingModel::new(&spec, 100.0);
        for i in 0..16 {
            let angle = i as f64 * PI / 8.0;
            let face = wall_at(90.0 * angle.cos(), 90.0 * angle.sin());
            let shaded = model.shade(i, face, &spec);
            assert!((0.0..=1.0).contains(&shaded.dimming));
            assert!(shaded.light >= spec.min_luminosity() - 1e-9);
            assert!(shaded.light <= spec.luminosity + 1e-9);
        }
    }

    #[test]
    fn test_shade_subdivided() {
        let spec = lighting(0.0);
        let model = ShadingModel::new(&spec, 100.0);
        let face = wall_at(60.0, 0.0);

        let parts = model.shade_subdivided(&face, 2);
        assert_eq!(parts.len(), 2 * 16);
        for part in &parts {
            assert_relative_eq!(
                part.light,
                model.light_at(part.triangle.centroid()),
                epsilon = 1e-12
            );
        }
    }
}
