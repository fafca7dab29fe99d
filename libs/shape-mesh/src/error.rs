//! # Error Types
//!
//! Errors reported by the precondition checks of the shape mesh crate.
//!
//! ## Error Policy
//!
//! - Mesh builders never fail; they assume well-formed input
//! - Callers validate input up front with the `check_*` helpers,
//!   [`crate::OrientationFrame::try_new`] and [`crate::Mesh::validate`]
//! - Errors include the offending values for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors detected while validating mesh input or output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// The normal/upwards pair does not span a plane.
    #[error("Degenerate orientation frame: {message}")]
    DegenerateFrame {
        /// What is wrong with the frame
        message: String,
    },

    /// The polygon cannot be normalized or triangulated.
    #[error("Degenerate polygon: {message}")]
    DegeneratePolygon {
        /// What is wrong with the polygon
        message: String,
    },

    /// Circle partition too small to close a fan.
    #[error("Invalid circle partition: {partition} (min: {min})")]
    InvalidPartition {
        /// Requested partition
        partition: u32,
        /// Smallest accepted partition
        min: u32,
    },

    /// Direction name is not one of `-Z`, `+Z`, `+X`, `-X`, `-Y`, `+Y`.
    #[error("Unknown direction: {name:?}")]
    UnknownDirection {
        /// The rejected name
        name: String,
    },

    /// A generated mesh broke one of its buffer invariants.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Which invariant failed
        message: String,
    },
}

impl MeshError {
    /// Creates a degenerate frame error.
    pub fn degenerate_frame(message: impl Into<String>) -> Self {
        Self::DegenerateFrame {
            message: message.into(),
        }
    }

    /// Creates a degenerate polygon error.
    pub fn degenerate_polygon(message: impl Into<String>) -> Self {
        Self::DegeneratePolygon {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for shape mesh checks.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate_polygon("zero width");
        assert!(err.to_string().contains("Degenerate polygon"));
        assert!(err.to_string().contains("zero width"));

        let err = MeshError::InvalidPartition { partition: 2, min: 3 };
        assert!(err.to_string().contains("2"));
        assert!(err.to_string().contains("min: 3"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
