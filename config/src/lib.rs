//! # Config Crate
//!
//! Centralized configuration constants for procedural shape meshes.
//! Every tolerance, extent and tessellation default used by the mesh
//! builders is defined here so the geometry crates never carry literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GeneratorConfig, DEFAULT_CIRCLE_PARTITION, HALF_EXTENT};
//!
//! // Shapes are normalized into a unit box centered at the origin
//! assert_eq!(HALF_EXTENT * 2.0, 1.0);
//!
//! let cfg = GeneratorConfig::default();
//! assert_eq!(cfg.circle_partition, DEFAULT_CIRCLE_PARTITION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain values, usable from any crate
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
