//! Sample sets.
//!
//! Each set builds a handful of named meshes. Names are `<stem><suffix>`,
//! where the suffix is an axis (`-Z`, `+X`, ...) or a role (`Plane`,
//! `Collider`).

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use shape_mesh::{
    check_partition, check_polygon, circle, pillar, pillar_for_collider, polygon_2d, unit_plane,
    Direction, Mesh, OrientationFrame, Point2, Point3,
};

/// A generated mesh together with its asset name.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// File stem of the asset, without extension.
    pub name: String,
    /// Generated geometry.
    pub mesh: Mesh,
}

impl Asset {
    fn new(stem: &str, suffix: impl std::fmt::Display, mesh: Mesh) -> Self {
        Self {
            name: format!("{stem}{suffix}"),
            mesh,
        }
    }
}

/// What to build from a user-supplied outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolygonKind {
    /// Flat face ([`polygon_2d`]).
    Plane,
    /// Closed solid ([`pillar`]).
    Pillar,
    /// Side walls only ([`pillar_for_collider`]).
    Collider,
}

/// Directions the circle set is generated for.
pub const CIRCLE_DIRECTIONS: [Direction; 4] = [
    Direction::NegZ,
    Direction::PosZ,
    Direction::PosX,
    Direction::NegX,
];

/// Outline of the sample triangle.
pub fn triangle_outline() -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 0.0),
    ]
}

/// Regular `partition`-gon on the unit circle, `(sin θ, cos θ)` with
/// `θ = 2π·i/partition`. Starts at the top and runs clockwise.
pub fn cylinder_outline(partition: u32) -> Vec<Point2> {
    let step = std::f64::consts::TAU / f64::from(partition);
    (0..partition)
        .map(|i| {
            let angle = step * f64::from(i);
            Point2::new(angle.sin(), angle.cos())
        })
        .collect()
}

/// `<stem>Plane` (flat triangle) and `<stem>Collider` (triangle walls), both
/// facing -Z.
pub fn triangle_set(stem: &str) -> Vec<Asset> {
    let frame = Direction::NegZ.frame();
    let outline = triangle_outline();
    vec![
        Asset::new(stem, "Plane", polygon_2d(&frame, &outline)),
        Asset::new(stem, "Collider", pillar_for_collider(&frame, &outline)),
    ]
}

/// Unit planes in all six axis directions.
pub fn plane_set(stem: &str) -> Vec<Asset> {
    Direction::ALL
        .into_iter()
        .map(|d| Asset::new(stem, d, unit_plane(&d.into())))
        .collect()
}

/// Circles facing -Z, +Z, +X and -X.
pub fn circle_set(stem: &str, partition: u32) -> Result<Vec<Asset>> {
    check_partition(partition)?;
    Ok(CIRCLE_DIRECTIONS
        .into_iter()
        .map(|d| Asset::new(stem, d, circle(&d.frame(), partition)))
        .collect())
}

/// A closed cylinder along Z, facing -Z.
pub fn cylinder_set(stem: &str, partition: u32) -> Result<Vec<Asset>> {
    check_partition(partition)?;
    let direction = Direction::NegZ;
    let mesh = pillar(&direction.frame(), &cylinder_outline(partition));
    Ok(vec![Asset::new(stem, direction, mesh)])
}

/// A user outline built as `kind`, named after `suffix`.
///
/// The outline is checked before building so malformed input is reported
/// instead of producing non-finite geometry.
pub fn polygon_set(
    stem: &str,
    suffix: &str,
    outline: &[Point2],
    kind: PolygonKind,
    frame: &OrientationFrame,
) -> Result<Vec<Asset>> {
    check_polygon(outline)?;
    let mesh = match kind {
        PolygonKind::Plane => polygon_2d(frame, outline),
        PolygonKind::Pillar => pillar(frame, outline),
        PolygonKind::Collider => pillar_for_collider(frame, outline),
    };
    Ok(vec![Asset::new(stem, suffix, mesh)])
}

/// Parses whitespace-separated `x,y` pairs, e.g. `"0,0 0,1 1,0"`.
pub fn parse_points(text: &str) -> Result<Vec<Point2>> {
    text.split_whitespace()
        .map(|pair| {
            let [x, y] = parse_components::<2>(pair)?;
            Ok(Point2::new(x, y))
        })
        .collect()
}

/// Parses one `x,y,z` vector.
pub fn parse_vector(text: &str) -> Result<Point3> {
    let [x, y, z] = parse_components::<3>(text.trim())?;
    Ok(Point3::new(x, y, z))
}

fn parse_components<const N: usize>(text: &str) -> Result<[f64; N]> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != N {
        bail!("expected {N} comma-separated numbers, got {text:?}");
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = f64::from_str(part.trim())
            .with_context(|| format!("invalid number {part:?} in {text:?}"))?;
    }
    Ok(out)
}
