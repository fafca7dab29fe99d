//! shape-mesh - sample mesh generator
//!
//! Builds the sample sets (triangle, planes, circles, cylinder) or a custom
//! polygon and writes them as OBJ or JSON files.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use config::constants::{GeneratorConfig, DEFAULT_CIRCLE_PARTITION};
use shape_mesh::{Direction, OrientationFrame};
use std::path::PathBuf;

use shape_mesh_export::samples::{self, Asset, PolygonKind};
use shape_mesh_export::{write_assets, OutputFormat};

#[derive(Parser)]
#[command(name = "shape-mesh")]
#[command(about = "Procedural shape mesh generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output directory
    #[arg(short, long, global = true, default_value = ".")]
    output: PathBuf,

    /// Output file format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Obj)]
    format: OutputFormat,
}

#[derive(Args)]
struct PartitionArgs {
    /// Number of rim segments
    #[arg(short, long, default_value_t = DEFAULT_CIRCLE_PARTITION)]
    partition: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Triangle plane and its collider
    Triangle {
        /// Asset name stem
        #[arg(short, long, default_value = "Triangle")]
        name: String,
    },

    /// Unit planes in all six axis directions
    Planes {
        /// Asset name stem
        #[arg(short, long, default_value = "Plane")]
        name: String,
    },

    /// Circles facing -Z, +Z, +X and -X
    Circles {
        /// Asset name stem
        #[arg(short, long, default_value = "Circle")]
        name: String,

        #[command(flatten)]
        partition: PartitionArgs,
    },

    /// Closed cylinder facing -Z
    Cylinder {
        /// Asset name stem
        #[arg(short, long, default_value = "Cylinder")]
        name: String,

        #[command(flatten)]
        partition: PartitionArgs,
    },

    /// Mesh from a custom outline
    Polygon {
        /// Outline as whitespace-separated x,y pairs (e.g. "0,0 0,1 1,0")
        #[arg(long, allow_hyphen_values = true)]
        points: String,

        /// What to build from the outline
        #[arg(short, long, value_enum, default_value_t = PolygonKind::Plane)]
        kind: PolygonKind,

        /// Axis direction (-Z, +Z, +X, -X, -Y, +Y)
        #[arg(short, long, allow_hyphen_values = true, default_value = "-Z")]
        direction: Direction,

        /// Custom normal as x,y,z (overrides --direction, needs --upwards)
        #[arg(long, allow_hyphen_values = true, requires = "upwards")]
        normal: Option<String>,

        /// Custom upwards vector as x,y,z
        #[arg(long, allow_hyphen_values = true, requires = "normal")]
        upwards: Option<String>,

        /// Asset name stem
        #[arg(short, long, default_value = "Polygon")]
        name: String,
    },

    /// Every sample set
    All {
        #[command(flatten)]
        partition: PartitionArgs,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let defaults = GeneratorConfig::default();

    let assets: Vec<Asset> = match cli.command {
        Commands::Triangle { name } => samples::triangle_set(&name),

        Commands::Planes { name } => samples::plane_set(&name),

        Commands::Circles { name, partition } => {
            let config = defaults.with_partition(partition.partition)?;
            samples::circle_set(&name, config.circle_partition)?
        }

        Commands::Cylinder { name, partition } => {
            let config = defaults.with_partition(partition.partition)?;
            samples::cylinder_set(&name, config.circle_partition)?
        }

        Commands::Polygon {
            points,
            kind,
            direction,
            normal,
            upwards,
            name,
        } => {
            let outline = samples::parse_points(&points)?;
            let (suffix, frame) = match (normal, upwards) {
                (Some(normal), Some(upwards)) => (
                    "",
                    OrientationFrame::try_new_with_tolerance(
                        samples::parse_vector(&normal)?,
                        samples::parse_vector(&upwards)?,
                        defaults.frame_tolerance,
                    )?,
                ),
                (None, None) => (direction.suffix(), OrientationFrame::from(direction)),
                _ => bail!("--normal and --upwards must be given together"),
            };
            samples::polygon_set(&name, suffix, &outline, kind, &frame)?
        }

        Commands::All { partition } => {
            let config = defaults.with_partition(partition.partition)?;
            let mut assets = samples::triangle_set("Triangle");
            assets.extend(samples::plane_set("Plane"));
            assets.extend(samples::circle_set("Circle", config.circle_partition)?);
            assets.extend(samples::cylinder_set("Cylinder", config.circle_partition)?);
            assets
        }
    };

    tracing::info!("Writing {} assets to {:?}", assets.len(), cli.output);
    let written = write_assets(&cli.output, &assets, cli.format)?;
    for path in &written {
        println!("{}", path.display());
    }
    tracing::info!("Done!");

    Ok(())
}
