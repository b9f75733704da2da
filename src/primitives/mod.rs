//! Floating-point geometric primitives and operations.

mod angle;
mod point2;
mod vec2;

pub use angle::{
    angle_of, length, normal, normalize, normalized_angle_difference, vector_from_polar,
};
pub use point2::Point2;
pub use vec2::Vec2;
