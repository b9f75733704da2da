//! Procedural construction of the faceted shape.
//!
//! # Example
//!
//! ```
//! use gemcut::shape::{build_faces, build_levels, CapStyle, Extent, ShapeSpec};
//!
//! let spec = ShapeSpec {
//!     sides: 6,
//!     level_count: 3,
//!     ..ShapeSpec::default()
//! };
//! let levels = build_levels(&spec, Extent::from_canvas(600.0, 600.0));
//! let faces = build_faces(&levels, spec.sides, CapStyle::Flat);
//!
//! // 6 walls between each pair of levels, plus the cap.
//! assert_eq!(faces.len(), 6 * 2 + 1);
//! ```

mod builder;
mod spec;

pub use builder::{build_faces, build_levels, Face, FaceKind, Level};
pub use spec::{angle_offset, max_levels, CapStyle, Extent, ShapeSpec};
