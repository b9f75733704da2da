//! Error types for gem configuration.

use thiserror::Error;

/// Reasons a [`ShapeSpec`](crate::shape::ShapeSpec) cannot be rendered as requested.
///
/// Geometry functions never return these; they degrade to empty output
/// instead. Validation exists for callers that want to reject settings up
/// front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GemError {
    /// A polygon needs at least three sides.
    #[error("a gem needs at least 3 sides, got {sides}")]
    TooFewSides {
        /// Requested side count.
        sides: usize,
    },

    /// A scale factor is outside `(0, 1]`.
    #[error("{name} must be in (0, 1], got {value}")]
    FactorOutOfRange {
        /// Which factor was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Walls need an outer and an inner ring.
    #[error("a gem needs at least 2 levels, got {levels}")]
    TooFewLevels {
        /// Requested level count.
        levels: usize,
    },

    /// The requested level count does not fit the scale factors.
    #[error("{requested} levels requested but the scale factors allow at most {max}")]
    TooManyLevels {
        /// Requested level count.
        requested: usize,
        /// Largest count the factors allow.
        max: usize,
    },
}
