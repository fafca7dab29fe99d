//! Flat polygon primitive.

use crate::core::frame::OrientationFrame;
use crate::core::{Point2, Point3};
use crate::mesh::{triples, Mesh};
use crate::rect::{stretch_to_rect, Rect};
use crate::triangulate::triangulate;

/// Creates a single flat face from a polygon outline, facing
/// `frame.normal`.
///
/// The outline is stretched into the unit square centered at the origin and
/// placed on the frame's plane; triangles come from [`triangulate`]. UVs are
/// the outline stretched into `[0, 1]²`. Intended mainly for collision use.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{polygon_2d, Direction, Point2};
///
/// let triangle = [Point2::new(0.0, 0.0), Point2::new(0.0, 1.0), Point2::new(1.0, 0.0)];
/// let mesh = polygon_2d(&Direction::NegZ.frame(), &triangle);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
pub fn polygon_2d(frame: &OrientationFrame, polygon: &[Point2]) -> Mesh {
    let vertices = place_on_plane(frame, polygon);
    let uvs = stretch_to_rect(polygon, Rect::UNIT);
    let triangles = triples(&triangulate(polygon));

    let mesh = Mesh::new(vertices, triangles)
        .with_uvs(uvs)
        .with_normals(vec![frame.normal; polygon.len()]);

    tracing::debug!(
        points = polygon.len(),
        triangles = mesh.triangle_count(),
        "built flat polygon"
    );
    mesh
}

/// Normalizes an outline into the centered unit square and places it on the
/// frame's plane through the origin.
pub(crate) fn place_on_plane(frame: &OrientationFrame, polygon: &[Point2]) -> Vec<Point3> {
    let right = frame.right();
    let up = frame.up();
    stretch_to_rect(polygon, Rect::CENTERED_UNIT)
        .into_iter()
        .map(|p| right * p.x + up * p.y)
        .collect()
}
