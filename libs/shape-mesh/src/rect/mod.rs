//! Bounding-box stretch of a polygon into a target rectangle.
//!
//! Used twice by the builders: once with [`Rect::UNIT`] to derive UVs and
//! once with [`Rect::CENTERED_UNIT`] to normalize shape coordinates.

use config::constants::{HALF_EXTENT, MIN_POLYGON_VERTICES, UNIT_EXTENT};

use crate::core::Point2;
use crate::error::{MeshError, MeshResult};

/// Axis-aligned rectangle given by its lower-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Lower-left corner.
    pub origin: Point2,
    /// Width and height.
    pub size: Point2,
}

impl Rect {
    /// `[0, 1] × [0, 1]`, the UV square.
    pub const UNIT: Rect = Rect::new(Point2::ZERO, Point2::splat(UNIT_EXTENT));

    /// `[-0.5, 0.5] × [-0.5, 0.5]`, the shape square.
    pub const CENTERED_UNIT: Rect =
        Rect::new(Point2::splat(-HALF_EXTENT), Point2::splat(UNIT_EXTENT));

    /// Creates a rectangle from origin and size.
    pub const fn new(origin: Point2, size: Point2) -> Self {
        Self { origin, size }
    }
}

/// Linearly remaps `points` so their bounding box becomes `rect`.
///
/// Order and count are preserved. A polygon whose bounding box has zero
/// width or height yields non-finite coordinates; see [`check_polygon`].
///
/// # Example
///
/// ```rust
/// use shape_mesh::{stretch_to_rect, Point2, Rect};
///
/// let uv = stretch_to_rect(&[Point2::new(2.0, 4.0), Point2::new(6.0, 5.0)], Rect::UNIT);
/// assert_eq!(uv, vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
/// ```
pub fn stretch_to_rect(points: &[Point2], rect: Rect) -> Vec<Point2> {
    let (min, max) = extent(points);
    let span = max - min;
    points
        .iter()
        .map(|&p| rect.origin + (p - min) / span * rect.size)
        .collect()
}

/// Bounding box `(min, max)` of a point list.
///
/// An empty list yields `(+inf, -inf)`.
pub fn extent(points: &[Point2]) -> (Point2, Point2) {
    points.iter().fold(
        (Point2::splat(f64::INFINITY), Point2::splat(f64::NEG_INFINITY)),
        |(min, max), &p| (min.min(p), max.max(p)),
    )
}

/// Checks that a polygon can be normalized and triangulated.
///
/// Rejects fewer than three points, non-finite coordinates and bounding
/// boxes with zero width or height.
pub fn check_polygon(points: &[Point2]) -> MeshResult<()> {
    if points.len() < MIN_POLYGON_VERTICES {
        return Err(MeshError::degenerate_polygon(format!(
            "{} points (min: {})",
            points.len(),
            MIN_POLYGON_VERTICES
        )));
    }
    if let Some(p) = points.iter().find(|p| !p.is_finite()) {
        return Err(MeshError::degenerate_polygon(format!(
            "non-finite point {p}"
        )));
    }
    let (min, max) = extent(points);
    let span = max - min;
    if span.x <= 0.0 || span.y <= 0.0 {
        return Err(MeshError::degenerate_polygon(format!(
            "bounding box {min} .. {max} has zero width or height"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
