//! Drop shadows cast by the outline.

use crate::primitives::Vec2;

/// Blur radii double from 1 while below this size.
pub const SHADOW_SIZE: f64 = 32.0;

/// One blurred copy of the outline drawn behind the gem.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowLayer {
    /// Translation of the outline, away from the light.
    pub offset: Vec2<f64>,
    /// Blur radius.
    pub blur: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Stacked shadows of increasing size for a light at `light_angle`.
///
/// Layer `i` has size `s = 2^i` (while `s < SHADOW_SIZE`), is offset by
/// `vector_from_polar(s, −light_angle)` and fades as `0.8 / (s / 3)`.
pub fn shadow_layers(light_angle: f64) -> Vec<ShadowLayer> {
    let mut layers = Vec::new();
    let mut size = 1.0;
    while size < SHADOW_SIZE {
        layers.push(ShadowLayer {
            offset: Vec2::from_polar(size, -light_angle),
            blur: size,
            opacity: (0.8 / (size / 3.0)).clamp(0.0, 1.0),
        });
        size *= 2.0;
    }
    layers
}
