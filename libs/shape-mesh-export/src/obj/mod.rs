//! Wavefront OBJ writer.
//!
//! Emits `v`, optional `vt` and `vn` records and one `f` record per
//! triangle. UVs and normals share the vertex index, so a face corner is
//! `i/i/i`, `i/i`, `i//i` or `i` (1-based) depending on which buffers the
//! mesh carries.

use std::io::Write;

use anyhow::Result;
use shape_mesh::Mesh;

/// Writes `mesh` as OBJ, starting with an `o <name>` record.
pub fn write_obj<W: Write>(w: &mut W, name: &str, mesh: &Mesh) -> Result<()> {
    writeln!(
        w,
        "# shape-mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    writeln!(w, "o {name}")?;

    for v in mesh.vertices() {
        writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
    }

    if let Some(uvs) = mesh.uvs() {
        for t in uvs {
            writeln!(w, "vt {} {}", t.x, t.y)?;
        }
    }

    if let Some(normals) = mesh.normals() {
        for n in normals {
            writeln!(w, "vn {} {} {}", n.x, n.y, n.z)?;
        }
    }

    let has_uv = mesh.uvs().is_some();
    let has_n = mesh.normals().is_some();
    for tri in mesh.triangles() {
        let [a, b, c] = tri.map(|i| corner(i + 1, has_uv, has_n));
        writeln!(w, "f {a} {b} {c}")?;
    }

    Ok(())
}

fn corner(i: u32, has_uv: bool, has_n: bool) -> String {
    match (has_uv, has_n) {
        (true, true) => format!("{i}/{i}/{i}"),
        (true, false) => format!("{i}/{i}"),
        (false, true) => format!("{i}//{i}"),
        (false, false) => i.to_string(),
    }
}
