//! gemcut - Faceted gem geometry
//!
//! Builds a polyhedron-like "gem" as flat 2D polygons: concentric rings of
//! points sampled at equal arc length, joined into wall faces and capped,
//! then shaded by how each face turns towards a light source. Everything is
//! a pure function of plain numeric parameters; drawing the result is left
//! to the caller.
//!
//! # Example
//!
//! ```
//! use gemcut::{Extent, Gem, LightingSpec, ShapeSpec};
//!
//! let gem = Gem::build(
//!     &ShapeSpec::default(),
//!     &LightingSpec::default(),
//!     Extent::from_canvas(600.0, 600.0),
//! );
//! for face in &gem.faces {
//!     assert!(face.light >= 0.0);
//! }
//! ```

pub mod curves;
pub mod error;
pub mod gem;
pub mod primitives;
pub mod shading;
pub mod shape;
pub mod tessellate;

pub use error::GemError;
pub use gem::Gem;
pub use primitives::{Point2, Vec2};
pub use shading::{LightingSpec, ShadedFace};
pub use shape::{CapStyle, Extent, Face, ShapeSpec};
