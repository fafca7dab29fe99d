//! shape-mesh-export library
//!
//! Builds the sample sets of `shape-mesh` and writes them to disk as
//! Wavefront OBJ or JSON files named `<stem><suffix>.<ext>`.

pub mod json;
pub mod obj;
pub mod samples;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

pub use samples::{Asset, PolygonKind};

/// File format of written assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Wavefront OBJ
    #[default]
    Obj,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Obj => "obj",
            OutputFormat::Json => "json",
        }
    }
}

/// Writes one asset into `dir` and returns the written path.
pub fn write_asset(dir: &Path, asset: &Asset, format: OutputFormat) -> Result<PathBuf> {
    let path = dir.join(format!("{}.{}", asset.name, format.extension()));
    let file =
        File::create(&path).with_context(|| format!("Failed to create output: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Obj => obj::write_obj(&mut writer, &asset.name, &asset.mesh),
        OutputFormat::Json => json::write_json(&mut writer, &asset.name, &asset.mesh),
    }
    .with_context(|| format!("Failed to write {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {:?}", path))?;

    tracing::info!(
        "Wrote {:?}: {} vertices, {} triangles",
        path,
        asset.mesh.vertex_count(),
        asset.mesh.triangle_count()
    );
    Ok(path)
}

/// Writes every asset into `dir`, creating the directory if needed.
///
/// Each mesh is validated before it is written.
pub fn write_assets(dir: &Path, assets: &[Asset], format: OutputFormat) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    assets
        .iter()
        .map(|asset| {
            asset
                .mesh
                .validate()
                .with_context(|| format!("Invalid mesh {}", asset.name))?;
            write_asset(dir, asset, format)
        })
        .collect()
}
