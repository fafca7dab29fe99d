//! Primitive mesh builders.
//!
//! Every builder is a pure function of an [`OrientationFrame`](crate::OrientationFrame)
//! and its shape parameters. Shapes are normalized into the unit box
//! centered at the origin.

pub mod circle;
pub mod pillar;
pub mod plane;
pub mod polygon;

pub use circle::{check_partition, circle};
pub use pillar::{pillar, pillar_for_collider};
pub use plane::unit_plane;
pub use polygon::polygon_2d;
