//! Core value types shared by every builder.
//!
//! Points are plain `glam` vectors; the orientation frame lives in
//! [`frame`].

pub mod frame;

/// A planar coordinate.
pub use glam::DVec2 as Point2;

/// A 3D coordinate.
pub use glam::DVec3 as Point3;
