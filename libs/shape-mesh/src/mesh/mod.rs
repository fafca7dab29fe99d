//! # Mesh Data Structure
//!
//! Immutable triangle mesh produced by the builders: vertices, triangles,
//! optional UVs and normals, and axis-aligned bounds.

use serde::Serialize;

use crate::core::{Point2, Point3};
use crate::error::{MeshError, MeshResult};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    /// Minimum corner
    pub min: Point3,
    /// Maximum corner
    pub max: Point3,
}

impl Bounds {
    /// Bounds of a point set. An empty set yields a zero box at the origin.
    pub fn from_points(points: &[Point3]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Self {
                min: Point3::ZERO,
                max: Point3::ZERO,
            };
        };
        rest.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |b, &p| Self {
                min: b.min.min(p),
                max: b.max.max(p),
            },
        )
    }

    /// Edge lengths of the box.
    #[inline]
    pub fn size(&self) -> Point3 {
        self.max - self.min
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }
}

/// A generated triangle mesh.
///
/// All buffers are fixed once a builder returns the mesh; only read access
/// is exposed. `uvs` and `normals`, when present, run parallel to
/// `vertices`.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{unit_plane, Direction};
///
/// let mesh = unit_plane(&Direction::NegZ.frame());
/// assert_eq!(mesh.indices(), vec![0, 1, 2, 2, 3, 0]);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    vertices: Vec<Point3>,
    triangles: Vec<[u32; 3]>,
    uvs: Option<Vec<Point2>>,
    normals: Option<Vec<Point3>>,
    bounds: Bounds,
}

impl Mesh {
    /// Assembles a mesh and computes its bounds.
    pub(crate) fn new(vertices: Vec<Point3>, triangles: Vec<[u32; 3]>) -> Self {
        let bounds = Bounds::from_points(&vertices);
        Self {
            vertices,
            triangles,
            uvs: None,
            normals: None,
            bounds,
        }
    }

    /// Attaches a UV buffer.
    pub(crate) fn with_uvs(mut self, uvs: Vec<Point2>) -> Self {
        self.uvs = Some(uvs);
        self
    }

    /// Attaches an explicit normal buffer.
    pub(crate) fn with_normals(mut self, normals: Vec<Point3>) -> Self {
        self.normals = Some(normals);
        self
    }

    /// Derives vertex normals from the triangles.
    ///
    /// Each vertex gets the normalized sum of the (area-weighted) face
    /// normals of the triangles that use it. Unused vertices keep a zero
    /// normal.
    pub(crate) fn with_computed_normals(mut self) -> Self {
        let mut normals = vec![Point3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let normal = (v1 - v0).cross(v2 - v0);

            for &i in tri {
                normals[i as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
        self
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Triangles as index triples.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Flat index buffer `[i0, i1, i2, i0, i1, i2, ...]`.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Texture coordinates, if the mesh carries them.
    #[inline]
    pub fn uvs(&self) -> Option<&[Point2]> {
        self.uvs.as_deref()
    }

    /// Vertex normals, if the mesh carries them.
    #[inline]
    pub fn normals(&self) -> Option<&[Point3]> {
        self.normals.as_deref()
    }

    /// Axis-aligned bounds of the vertices.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Checks the buffer invariants.
    ///
    /// - every index is below the vertex count
    /// - UV and normal buffers match the vertex count
    /// - every vertex is finite
    pub fn validate(&self) -> MeshResult<()> {
        let count = self.vertices.len();

        if let Some(tri) = self
            .triangles
            .iter()
            .find(|tri| tri.iter().any(|&i| i as usize >= count))
        {
            return Err(MeshError::validation(format!(
                "triangle {tri:?} references a vertex beyond {count}"
            )));
        }

        if let Some(uvs) = &self.uvs {
            if uvs.len() != count {
                return Err(MeshError::validation(format!(
                    "{} uvs for {count} vertices",
                    uvs.len()
                )));
            }
        }

        if let Some(normals) = &self.normals {
            if normals.len() != count {
                return Err(MeshError::validation(format!(
                    "{} normals for {count} vertices",
                    normals.len()
                )));
            }
        }

        if let Some(v) = self.vertices.iter().find(|v| !v.is_finite()) {
            return Err(MeshError::validation(format!("non-finite vertex {v}")));
        }

        Ok(())
    }
}

/// Groups a flat stride-3 index list into triangles.
pub(crate) fn triples(flat: &[u32]) -> Vec<[u32; 3]> {
    flat.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect()
}
