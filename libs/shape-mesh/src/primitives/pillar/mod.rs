//! # Pillar Extrusion
//!
//! Extrudes a polygon outline along the frame normal into a prism of
//! thickness 1 spanning `[-0.5, 0.5]` along the normal.
//!
//! ## Vertex Layout
//!
//! ```text
//! pillar:               [front cap | back cap | side front | side back]   4n
//! pillar_for_collider:  [front rim | back rim]                            2n
//! ```
//!
//! The side walls get their own copies of the rims so their normals and UVs
//! stay independent of the caps.

use config::constants::HALF_EXTENT;

use super::polygon::place_on_plane;
use crate::core::frame::OrientationFrame;
use crate::core::{Point2, Point3};
use crate::mesh::{triples, Mesh};
use crate::rect::{stretch_to_rect, Rect};
use crate::triangulate::{signed_area, triangulate};

/// Creates a closed solid pillar from a polygon outline.
///
/// The front cap (at `+0.5·n̂`) uses the triangulation as is and the back cap
/// (at `-0.5·n̂`) the same index list reversed, so both face outward. Side
/// walls form a quad strip over edges `i → (i + 1) % n`. Cap UVs are the
/// outline stretched into `[0, 1]²`; side walls run `u = i/n` around the
/// perimeter with `v = 1` on the front rim and `v = 0` on the back rim.
/// Normals are derived from the triangles.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{pillar, Direction, Point2};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0, 0.0),
/// ];
/// let mesh = pillar(&Direction::NegZ.frame(), &square);
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.triangle_count(), 2 + 2 + 8);
/// ```
pub fn pillar(frame: &OrientationFrame, polygon: &[Point2]) -> Mesh {
    let n = polygon.len();
    let (front, back) = extrude_rims(frame, polygon);

    let mut vertices = Vec::with_capacity(4 * n);
    vertices.extend_from_slice(&front);
    vertices.extend_from_slice(&back);
    vertices.extend(front);
    vertices.extend(back);

    let cap = triangulate(polygon);
    let offset = n as u32;
    let mut indices = Vec::with_capacity(2 * cap.len() + 6 * n);
    indices.extend_from_slice(&cap);
    indices.extend(cap.iter().rev().map(|i| i + offset));
    indices.extend(side_walls(polygon, 2 * offset));

    let cap_uvs = stretch_to_rect(polygon, Rect::UNIT);
    let mut uvs = Vec::with_capacity(4 * n);
    uvs.extend_from_slice(&cap_uvs);
    uvs.extend(cap_uvs);
    uvs.extend(rim_uvs(n, 1.0));
    uvs.extend(rim_uvs(n, 0.0));

    let mesh = Mesh::new(vertices, triples(&indices))
        .with_uvs(uvs)
        .with_computed_normals();

    tracing::debug!(
        points = n,
        cap_triangles = cap.len() / 3,
        triangles = mesh.triangle_count(),
        "built pillar"
    );
    mesh
}

/// Creates the side walls of a pillar without caps and without UVs.
///
/// Meant as collision geometry; vertices are the front rim followed by the
/// back rim.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{pillar_for_collider, Direction, Point2};
///
/// let triangle = [Point2::new(0.0, 0.0), Point2::new(0.0, 1.0), Point2::new(1.0, 0.0)];
/// let mesh = pillar_for_collider(&Direction::NegZ.frame(), &triangle);
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 6);
/// assert!(mesh.uvs().is_none());
/// ```
pub fn pillar_for_collider(frame: &OrientationFrame, polygon: &[Point2]) -> Mesh {
    let (mut vertices, back) = extrude_rims(frame, polygon);
    vertices.extend(back);

    let mesh = Mesh::new(vertices, triples(&side_walls(polygon, 0))).with_computed_normals();

    tracing::debug!(
        points = polygon.len(),
        triangles = mesh.triangle_count(),
        "built pillar collider"
    );
    mesh
}

/// Front rim at `+0.5·n̂` and back rim derived from it at `-0.5·n̂`.
fn extrude_rims(frame: &OrientationFrame, polygon: &[Point2]) -> (Vec<Point3>, Vec<Point3>) {
    let depth = frame.depth();
    let front: Vec<Point3> = place_on_plane(frame, polygon)
        .into_iter()
        .map(|p| p + depth * HALF_EXTENT)
        .collect();
    let back = front.iter().map(|&p| p - depth).collect();
    (front, back)
}

/// Quad strip between the front rim starting at `base` and the back rim
/// starting at `base + n`.
///
/// Clockwise outlines (the triangulator's convention) face outward with
/// `(a, a+n, next+n), (a, next+n, next)`; counter-clockwise outlines get the
/// mirrored triangles so the walls still face outward.
fn side_walls(polygon: &[Point2], base: u32) -> Vec<u32> {
    let n = polygon.len() as u32;
    let clockwise = signed_area(polygon) <= 0.0;
    (0..n)
        .flat_map(|i| {
            let a = base + i;
            let next = base + (i + 1) % n;
            if clockwise {
                [a, a + n, next + n, a, next + n, next]
            } else {
                [a, next + n, a + n, a, next, next + n]
            }
        })
        .collect()
}

/// One UV row around the perimeter: `(i/n, v)`.
fn rim_uvs(n: usize, v: f64) -> impl Iterator<Item = Point2> {
    let step = 1.0 / n as f64;
    (0..n).map(move |i| Point2::new(step * i as f64, v))
}

#[cfg(test)]
mod tests;
