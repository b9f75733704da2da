//! Lighting configuration.

use std::f64::consts::FRAC_PI_4;

/// Stop positions and jitter used to fake specular reflections.
///
/// Every gradient starts and ends with an unperturbed stop at 0 and 1; the
/// positions listed here sit in between and are shifted by up to
/// `±jitter` luminosity points using the reflection sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientProfile {
    /// Inner stop positions for wall faces and pointy-cap triangles.
    pub wall_stops: Vec<f64>,
    /// Inner stop positions for the flat cap.
    pub cap_stops: Vec<f64>,
    /// Largest luminosity shift a reflection can apply.
    pub jitter: f64,
}

impl Default for GradientProfile {
    fn default() -> Self {
        Self {
            wall_stops: vec![0.2, 0.5, 0.7],
            cap_stops: vec![0.2, 0.4, 0.5, 0.7, 0.8],
            jitter: 10.0,
        }
    }
}

/// Where the light comes from and how bright the gem is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightingSpec {
    /// Direction of the light source, in radians.
    pub light_angle: f64,
    /// Luminosity of a face pointing straight at the light.
    pub luminosity: f64,
    /// How much darker a face pointing away from the light gets.
    pub contrast: f64,
    /// Values in `[0, 1)` consumed by gradient stops, indexed per face.
    ///
    /// Supplied by the caller so shading stays deterministic. Stops past the
    /// end of the sequence are not perturbed.
    pub reflections: Vec<f64>,
    pub gradient: GradientProfile,
}

impl Default for LightingSpec {
    fn default() -> Self {
        Self::from_clock_position(3.0, 40.0, 30.0)
    }
}

impl LightingSpec {
    /// Creates a lighting spec from an angle in radians.
    pub fn new(light_angle: f64, luminosity: f64, contrast: f64) -> Self {
        Self {
            light_angle,
            luminosity,
            contrast,
            reflections: Vec::new(),
            gradient: GradientProfile::default(),
        }
    }

    /// Creates a lighting spec from a clock position in `0..=7`, each step an eighth turn.
    pub fn from_clock_position(position: f64, luminosity: f64, contrast: f64) -> Self {
        Self::new(position * FRAC_PI_4, luminosity, contrast)
    }

    /// Replaces the reflection sequence.
    pub fn with_reflections(mut self, reflections: Vec<f64>) -> Self {
        self.reflections = reflections;
        self
    }

    /// Replaces the gradient profile.
    pub fn with_gradient(mut self, gradient: GradientProfile) -> Self {
        self.gradient = gradient;
        self
    }

    /// Darkest luminosity a face can reach: `max(luminosity − contrast, 0)`.
    #[inline]
    pub fn min_luminosity(&self) -> f64 {
        (self.luminosity - self.contrast).max(0.0)
    }
}
