//! # Shape Mesh
//!
//! Procedural triangle meshes built from simple 2D outlines.
//!
//! ## Architecture
//!
//! ```text
//! triangulate (ear clipping) ─┐
//!                             ├─→ primitives (plane, circle, polygon, pillar) → Mesh
//! rect (bounding-box stretch) ┘
//! ```
//!
//! Every builder takes an [`OrientationFrame`] (`normal` + `upwards`) so the
//! same construction works for any of the six axis directions or for an
//! arbitrary direction. Builders are pure and infallible: malformed input
//! propagates as malformed geometry. Use the `check_*` helpers and
//! [`OrientationFrame::try_new`] to validate input up front.
//!
//! ## Usage
//!
//! ```rust
//! use shape_mesh::{pillar, Direction, Point2};
//!
//! let outline = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(1.0, 0.0),
//! ];
//! let mesh = pillar(&Direction::NegZ.frame(), &outline);
//! assert_eq!(mesh.vertex_count(), 12);
//! assert_eq!(mesh.triangle_count(), 8);
//! ```

pub mod core;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod rect;
pub mod triangulate;

pub use crate::core::frame::{Direction, OrientationFrame};
pub use crate::core::{Point2, Point3};
pub use error::{MeshError, MeshResult};
pub use mesh::{Bounds, Mesh};
pub use primitives::{
    check_partition, circle, pillar, pillar_for_collider, polygon_2d, unit_plane,
};
pub use rect::{check_polygon, stretch_to_rect, Rect};
pub use triangulate::triangulate;
