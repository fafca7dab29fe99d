//! Centralized configuration values shared across the shape mesh crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Threshold for the ear test of the polygon triangulator.
///
/// A candidate ear is accepted only when the cross product of its two edges
/// is strictly greater than this value. It is the smallest positive normal
/// `f64`, so only clockwise and exactly collinear ears are rejected.
///
/// # Examples
/// ```
/// use config::constants::EAR_AREA_EPSILON;
/// let collinear_cross = 0.0;
/// assert!(!(collinear_cross > EAR_AREA_EPSILON));
/// ```
pub const EAR_AREA_EPSILON: f64 = f64::MIN_POSITIVE;

/// Tolerance used when checking an orientation frame for degeneracy.
///
/// The frame is rejected when `|normal × upwards|` (of the normalized
/// vectors) falls below this value.
///
/// # Examples
/// ```
/// use config::constants::FRAME_PARALLEL_TOLERANCE;
/// assert!(FRAME_PARALLEL_TOLERANCE < 1.0e-6);
/// ```
pub const FRAME_PARALLEL_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// EXTENT CONSTANTS
// =============================================================================

/// Edge length of the unit box every generated shape is normalized into.
///
/// # Examples
/// ```
/// use config::constants::UNIT_EXTENT;
/// assert_eq!(UNIT_EXTENT, 1.0);
/// ```
pub const UNIT_EXTENT: f64 = 1.0;

/// Half of [`UNIT_EXTENT`]; shapes span `[-HALF_EXTENT, HALF_EXTENT]`.
///
/// # Examples
/// ```
/// use config::constants::HALF_EXTENT;
/// let front_depth = HALF_EXTENT;
/// let back_depth = front_depth - 1.0;
/// assert_eq!(back_depth, -HALF_EXTENT);
/// ```
pub const HALF_EXTENT: f64 = 0.5;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default number of rim segments for circles and cylinders.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CIRCLE_PARTITION;
/// let user_partition: Option<u32> = None;
/// assert_eq!(user_partition.unwrap_or(DEFAULT_CIRCLE_PARTITION), 24);
/// ```
pub const DEFAULT_CIRCLE_PARTITION: u32 = 24;

/// Smallest partition that still forms a closed fan.
///
/// # Examples
/// ```
/// use config::constants::MIN_CIRCLE_PARTITION;
/// assert!(2 < MIN_CIRCLE_PARTITION);
/// ```
pub const MIN_CIRCLE_PARTITION: u32 = 3;

/// Smallest polygon that produces any geometry.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_VERTICES;
/// assert_eq!(MIN_POLYGON_VERTICES, 3);
/// ```
pub const MIN_POLYGON_VERTICES: usize = 3;

// =============================================================================
// GENERATOR CONFIG
// =============================================================================

/// Immutable snapshot of generator settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert!(config.frame_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Rim segment count for circles and cylinders.
    pub circle_partition: u32,
    /// Tolerance for rejecting parallel normal/upwards pairs.
    pub frame_tolerance: f64,
}

impl GeneratorConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// partition and tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(48, 1.0e-6).expect("valid config");
    /// assert_eq!(cfg.circle_partition, 48);
    /// ```
    pub fn new(circle_partition: u32, frame_tolerance: f64) -> Result<Self, ConfigError> {
        if circle_partition < MIN_CIRCLE_PARTITION {
            return Err(ConfigError::InvalidPartition(circle_partition));
        }
        if frame_tolerance.is_nan() || frame_tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(frame_tolerance));
        }
        Ok(Self {
            circle_partition,
            frame_tolerance,
        })
    }

    /// Returns a copy with a different circle partition, validated.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::default().with_partition(8).unwrap();
    /// assert_eq!(cfg.circle_partition, 8);
    /// ```
    pub fn with_partition(self, circle_partition: u32) -> Result<Self, ConfigError> {
        Self::new(circle_partition, self.frame_tolerance)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            circle_partition: DEFAULT_CIRCLE_PARTITION,
            frame_tolerance: FRAME_PARALLEL_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the partition is too small to form a closed fan.
    InvalidPartition(u32),
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPartition(value) => {
                write!(f, "circle_partition must be >= {MIN_CIRCLE_PARTITION}: {value}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "frame_tolerance must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
