//! Unit plane primitive.

use config::constants::HALF_EXTENT;

use crate::core::frame::OrientationFrame;
use crate::core::Point2;
use crate::mesh::Mesh;

/// Creates a 1×1 quad centered at the origin, facing `frame.normal`.
///
/// Corners run bottom-left, top-left, top-right, bottom-right in the
/// frame's `(right, up)` plane and are split into the triangles `(0, 1, 2)`
/// and `(2, 3, 0)`. UVs are the matching unit-square corners and every
/// vertex normal is `frame.normal` as given.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{unit_plane, Direction};
///
/// let mesh = unit_plane(&Direction::PosY.frame());
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
pub fn unit_plane(frame: &OrientationFrame) -> Mesh {
    let up = frame.up() * HALF_EXTENT;
    let right = frame.right() * HALF_EXTENT;

    let vertices = vec![-up - right, up - right, up + right, -up + right];
    let uvs = vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 0.0),
    ];

    let mesh = Mesh::new(vertices, vec![[0, 1, 2], [2, 3, 0]])
        .with_uvs(uvs)
        .with_normals(vec![frame.normal; 4]);

    tracing::debug!(normal = %frame.normal, "built unit plane");
    mesh
}
