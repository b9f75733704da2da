//! Shape configuration and the limits derived from it.

use crate::error::GemError;
use std::f64::consts::FRAC_PI_2;

/// How the innermost level is closed off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapStyle {
    /// The innermost level becomes one flat polygon (a table facet).
    #[default]
    Flat,
    /// Every innermost edge is joined to an apex at the origin.
    Pointy,
}

/// Size of the drawing area available to the outermost level.
///
/// Level radii are `max_width · factor` and `max_height · factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub max_width: f64,
    pub max_height: f64,
}

impl Extent {
    /// Creates an extent from explicit radii.
    #[inline]
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Extent for a canvas of the given size, leaving a margin around the gem.
    #[inline]
    pub fn from_canvas(width: f64, height: f64) -> Self {
        Self::new(width / 2.4, height / 2.4)
    }

    /// Largest radius, used to normalize distances from the center.
    #[inline]
    pub fn max_distance(&self) -> f64 {
        self.max_width.max(self.max_height)
    }

    /// True when both radii are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.max_width.is_finite() && self.max_height.is_finite()
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::from_canvas(600.0, 600.0)
    }
}

/// Parameters of the faceted shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeSpec {
    /// Points per level (polygon side count).
    pub sides: usize,
    /// Horizontal scale of the outer level, in `(0, 1]`.
    pub width_factor: f64,
    /// Vertical scale of the outer level, in `(0, 1]`.
    pub height_factor: f64,
    /// Number of concentric levels, at least 2 and at most [`Self::max_levels`].
    pub level_count: usize,
    /// Rotates the first vertex away from the top of the shape.
    pub use_alternate_angle: bool,
    /// Easing control governing how fast the outer levels shrink.
    pub outside_spread: f64,
    /// Easing control governing how fast the inner levels shrink.
    pub center_spread: f64,
    /// How the innermost level is closed.
    pub cap: CapStyle,
}

impl Default for ShapeSpec {
    fn default() -> Self {
        Self {
            sides: 6,
            width_factor: 0.8,
            height_factor: 0.8,
            level_count: 3,
            use_alternate_angle: false,
            outside_spread: 0.5,
            center_spread: 0.5,
            cap: CapStyle::Flat,
        }
    }
}

impl ShapeSpec {
    /// Largest level count the scale factors allow.
    #[inline]
    pub fn max_levels(&self) -> usize {
        max_levels(self.width_factor, self.height_factor)
    }

    /// Angle of the first vertex of every level.
    #[inline]
    pub fn angle_offset(&self) -> f64 {
        angle_offset(self.sides, self.use_alternate_angle)
    }

    /// Radial room left for the inner levels after the outer one.
    #[inline]
    pub fn available_space(&self) -> f64 {
        self.width_factor.min(self.height_factor) - 0.1
    }

    /// Level count actually used when building: `level_count` capped at `max_levels`.
    #[inline]
    pub fn effective_level_count(&self) -> usize {
        self.level_count.min(self.max_levels())
    }

    /// Copy of this spec with `level_count` reduced to fit the scale factors.
    pub fn clamped(&self) -> Self {
        Self {
            level_count: self.effective_level_count(),
            ..*self
        }
    }

    /// First scale or spread factor that is NaN or infinite.
    pub fn non_finite_factor(&self) -> Option<(&'static str, f64)> {
        [
            ("width_factor", self.width_factor),
            ("height_factor", self.height_factor),
            ("outside_spread", self.outside_spread),
            ("center_spread", self.center_spread),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    }

    /// Checks every field against its documented range.
    pub fn validate(&self) -> Result<(), GemError> {
        if self.sides < 3 {
            return Err(GemError::TooFewSides { sides: self.sides });
        }
        if let Some((name, value)) = self.non_finite_factor() {
            return Err(GemError::FactorOutOfRange { name, value });
        }
        for (name, value) in [
            ("width_factor", self.width_factor),
            ("height_factor", self.height_factor),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(GemError::FactorOutOfRange { name, value });
            }
        }
        if self.level_count < 2 {
            return Err(GemError::TooFewLevels {
                levels: self.level_count,
            });
        }
        let max = self.max_levels();
        if self.level_count > max {
            return Err(GemError::TooManyLevels {
                requested: self.level_count,
                max,
            });
        }
        Ok(())
    }
}

/// `round((min(width, height) − 0.2) × 10)`, saturating at zero.
///
/// Zero when either factor is not finite.
///
/// # Example
///
/// ```
/// use gemcut::shape::max_levels;
///
/// assert_eq!(max_levels(0.6, 0.9), 4);
/// ```
pub fn max_levels(width_factor: f64, height_factor: f64) -> usize {
    if !(width_factor.is_finite() && height_factor.is_finite()) {
        return 0;
    }
    let raw = ((width_factor.min(height_factor) - 0.2) * 10.0).round();
    raw.max(0.0) as usize
}

/// Angle of the first vertex, in quarter turns.
///
/// Normally one quarter turn. With the alternate angle, even side counts
/// start at zero and odd side counts at three quarter turns.
pub fn angle_offset(sides: usize, use_alternate_angle: bool) -> f64 {
    let quarters = match (use_alternate_angle, sides % 2 == 0) {
        (false, _) => 1.0,
        (true, true) => 0.0,
        (true, false) => 3.0,
    };
    quarters * FRAC_PI_2
}
