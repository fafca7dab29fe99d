//! Orientation frames.
//!
//! A frame is a `(normal, upwards)` pair. The builders derive an orthonormal
//! basis from it: `up = upwards.normalize()`, `right = (normal × upwards)
//! .normalize()` and `depth = normal.normalize()`. A planar point `(x, y)`
//! lands at `x·right + y·up`.

use std::fmt;
use std::str::FromStr;

use config::constants::FRAME_PARALLEL_TOLERANCE;

use super::{Point2, Point3};
use crate::error::{MeshError, MeshResult};

/// Local 2D-in-3D coordinate system for a generated face.
///
/// Builders do not validate the frame. A zero vector or a normal parallel to
/// `upwards` yields NaN coordinates; use [`OrientationFrame::try_new`] to
/// reject such frames up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationFrame {
    /// Direction the generated face points to.
    pub normal: Point3,
    /// Direction that becomes the planar `+y` axis.
    pub upwards: Point3,
}

impl OrientationFrame {
    /// Creates a frame without validation.
    pub const fn new(normal: Point3, upwards: Point3) -> Self {
        Self { normal, upwards }
    }

    /// Creates a frame, rejecting zero-length or parallel vectors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shape_mesh::{OrientationFrame, Point3};
    ///
    /// assert!(OrientationFrame::try_new(Point3::NEG_Z, Point3::Y).is_ok());
    /// assert!(OrientationFrame::try_new(Point3::Y, Point3::Y * 2.0).is_err());
    /// ```
    pub fn try_new(normal: Point3, upwards: Point3) -> MeshResult<Self> {
        Self::try_new_with_tolerance(normal, upwards, FRAME_PARALLEL_TOLERANCE)
    }

    /// Same as [`OrientationFrame::try_new`] with an explicit tolerance on
    /// `|n̂ × û|`.
    pub fn try_new_with_tolerance(
        normal: Point3,
        upwards: Point3,
        tolerance: f64,
    ) -> MeshResult<Self> {
        let (Some(n), Some(u)) = (normal.try_normalize(), upwards.try_normalize()) else {
            return Err(MeshError::degenerate_frame(format!(
                "zero or non-finite vector (normal {normal}, upwards {upwards})"
            )));
        };
        if n.cross(u).length() < tolerance {
            return Err(MeshError::degenerate_frame(format!(
                "normal {normal} is parallel to upwards {upwards}"
            )));
        }
        Ok(Self::new(normal, upwards))
    }

    /// Unit vector along `upwards`.
    #[inline]
    pub fn up(&self) -> Point3 {
        self.upwards.normalize()
    }

    /// Unit vector along `normal × upwards`.
    #[inline]
    pub fn right(&self) -> Point3 {
        self.normal.cross(self.upwards).normalize()
    }

    /// Unit vector along `normal`.
    #[inline]
    pub fn depth(&self) -> Point3 {
        self.normal.normalize()
    }

    /// Places a planar point on the frame's plane through the origin.
    #[inline]
    pub fn project(&self, point: Point2) -> Point3 {
        self.right() * point.x + self.up() * point.y
    }
}

impl From<Direction> for OrientationFrame {
    fn from(direction: Direction) -> Self {
        direction.frame()
    }
}

// =============================================================================
// AXIS DIRECTIONS
// =============================================================================

/// The six axis-aligned facings used for generated asset sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Facing `-Z`, up `+Y`.
    NegZ,
    /// Facing `+Z`, up `+Y`.
    PosZ,
    /// Facing `+X`, up `+Y`.
    PosX,
    /// Facing `-X`, up `+Y`.
    NegX,
    /// Facing `-Y`, up `-Z`.
    NegY,
    /// Facing `+Y`, up `+Z`.
    PosY,
}

impl Direction {
    /// All directions, in asset generation order.
    pub const ALL: [Direction; 6] = [
        Direction::NegZ,
        Direction::PosZ,
        Direction::PosX,
        Direction::NegX,
        Direction::NegY,
        Direction::PosY,
    ];

    /// The frame a face in this direction is built with.
    pub const fn frame(self) -> OrientationFrame {
        match self {
            Direction::NegZ => OrientationFrame::new(Point3::NEG_Z, Point3::Y),
            Direction::PosZ => OrientationFrame::new(Point3::Z, Point3::Y),
            Direction::PosX => OrientationFrame::new(Point3::X, Point3::Y),
            Direction::NegX => OrientationFrame::new(Point3::NEG_X, Point3::Y),
            Direction::NegY => OrientationFrame::new(Point3::NEG_Y, Point3::NEG_Z),
            Direction::PosY => OrientationFrame::new(Point3::Y, Point3::Z),
        }
    }

    /// Asset name suffix, e.g. `"-Z"`.
    pub const fn suffix(self) -> &'static str {
        match self {
            Direction::NegZ => "-Z",
            Direction::PosZ => "+Z",
            Direction::PosX => "+X",
            Direction::NegX => "-X",
            Direction::NegY => "-Y",
            Direction::PosY => "+Y",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Direction {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Direction::ALL
            .into_iter()
            .find(|d| d.suffix() == wanted)
            .ok_or_else(|| MeshError::UnknownDirection { name: s.to_string() })
    }
}
