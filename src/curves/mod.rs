//! Curve sampling: arc-length ellipses, Bézier resampling and easing profiles.

mod bezier;
mod easing;
mod ellipse;

pub use bezier::{polyline_length, resample_by_chord_length, CubicBezier2};
pub use easing::CubicBezierEasing;
pub use ellipse::{
    evenly_spaced_ellipse_points, ArcLengthEllipse, ARC_LENGTH_STEPS, BISECTION_TOLERANCE,
};
