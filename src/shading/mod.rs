//! Lighting and shading of shape faces.

mod lighting;
mod model;
mod reflections;
mod shadow;

pub use lighting::{GradientProfile, LightingSpec};
pub use model::{GradientStop, ShadedFace, ShadedTriangle, ShadingModel};
pub use reflections::{halton_reflections, radical_inverse, DEFAULT_REFLECTION_COUNT};
pub use shadow::{shadow_layers, ShadowLayer, SHADOW_SIZE};
