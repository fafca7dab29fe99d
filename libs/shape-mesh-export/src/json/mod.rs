//! JSON writer.
//!
//! The document is `{ "name": ..., "mesh": { "vertices": [[x, y, z], ...],
//! "triangles": [[a, b, c], ...], "uvs": ..., "normals": ..., "bounds": ... } }`.
//! Missing UVs or normals are written as `null`.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use shape_mesh::Mesh;

#[derive(Serialize)]
struct Document<'a> {
    name: &'a str,
    mesh: &'a Mesh,
}

/// Writes `mesh` as a pretty-printed JSON document.
pub fn write_json<W: Write>(w: &mut W, name: &str, mesh: &Mesh) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, &Document { name, mesh })?;
    writeln!(w)?;
    Ok(())
}
