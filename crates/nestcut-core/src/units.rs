//! Unit conversion utilities
//!
//! Artwork dimensions are stored in inches throughout the engine; laser
//! cutter front ends frequently display metric. Handles conversion and
//! formatting between the two systems.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Imperial
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a length stored in inches for display
///
/// * `value_in` - Value in inches
/// * `system` - Target measurement system
pub fn format_length(value_in: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Imperial => format!("{:.3}", value_in),
        MeasurementSystem::Metric => format!("{:.3}", value_in * MM_PER_INCH),
    }
}

/// Parse a length string to inches
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = input
        .parse()
        .map_err(|_| format!("Invalid length: {}", input))?;
    match system {
        MeasurementSystem::Imperial => Ok(value),
        MeasurementSystem::Metric => Ok(value / MM_PER_INCH),
    }
}
