//! Error types for design configuration validation.
//!
//! Geometry operations themselves degrade silently (empty curves, absent
//! samples) so a recompute can never take down an interactive session;
//! these errors only surface when a configuration record is validated at
//! the boundary.

use thiserror::Error;

/// Validation error for a design snapshot or layer configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// Not enough control points to form a closed loop
    #[error("control polygon needs at least 3 points, got {count}")]
    TooFewControlPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// Scale factor outside the shrinking range
    #[error("{which} scale factor {value} is outside (0, 1]")]
    ScaleOutOfRange {
        /// Which scale parameter was rejected ("start" or "end").
        which: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Minimum nest size must be positive
    #[error("minimum nest size must be positive, got {value}")]
    NonPositiveMinSize {
        /// The rejected value.
        value: f64,
    },

    /// Layer thickness must be positive
    #[error("layer thickness must be positive, got {value}")]
    NonPositiveThickness {
        /// The rejected value.
        value: f64,
    },
}

/// Result alias for validation paths.
pub type Result<T> = std::result::Result<T, DesignError>;
