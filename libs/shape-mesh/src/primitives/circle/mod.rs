//! Circle fan primitive.

use std::f64::consts::TAU;

use config::constants::{HALF_EXTENT, MIN_CIRCLE_PARTITION};

use crate::core::frame::OrientationFrame;
use crate::core::{Point2, Point3};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Creates a circle of diameter 1 centered at the origin, facing
/// `frame.normal`.
///
/// Rim vertex `i` sits at angle `θ = i·2π/partition`, measured from `up`
/// towards `right`. The center vertex is appended last and every triangle
/// is `(i, (i + 1) % partition, partition)`. A `partition` below 3 is a
/// caller error; see [`check_partition`].
///
/// # Example
///
/// ```rust
/// use shape_mesh::{circle, Direction};
///
/// let mesh = circle(&Direction::NegZ.frame(), 24);
/// assert_eq!(mesh.vertex_count(), 25);
/// assert_eq!(mesh.triangle_count(), 24);
/// ```
pub fn circle(frame: &OrientationFrame, partition: u32) -> Mesh {
    let up = frame.up() * HALF_EXTENT;
    let right = frame.right() * HALF_EXTENT;
    let step = TAU / partition as f64;
    let rim = partition as usize;

    let mut vertices = Vec::with_capacity(rim + 1);
    let mut uvs = Vec::with_capacity(rim + 1);
    for i in 0..rim {
        let (sin, cos) = (step * i as f64).sin_cos();
        vertices.push(up * cos + right * sin);
        uvs.push(Point2::new(sin * HALF_EXTENT + HALF_EXTENT, cos * HALF_EXTENT + HALF_EXTENT));
    }

    // Center goes last so the rim indices match the angles.
    vertices.push(Point3::ZERO);
    uvs.push(Point2::splat(HALF_EXTENT));

    let triangles = (0..partition)
        .map(|i| [i, (i + 1) % partition, partition])
        .collect();

    let mesh = Mesh::new(vertices, triangles)
        .with_uvs(uvs)
        .with_normals(vec![frame.normal; rim + 1]);

    tracing::debug!(partition, normal = %frame.normal, "built circle");
    mesh
}

/// Checks that `partition` can close a fan.
pub fn check_partition(partition: u32) -> MeshResult<()> {
    if partition < MIN_CIRCLE_PARTITION {
        return Err(MeshError::InvalidPartition {
            partition,
            min: MIN_CIRCLE_PARTITION,
        });
    }
    Ok(())
}
