//! Gradient colors for rib faces.
//!
//! Top faces get a horizontal gradient between two colors, warped around
//! an adjustable center; side faces get one flat color.

use serde::{Deserialize, Serialize};

use nestcut_core::CurveBounds;

/// Linear RGB color, channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        Color::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

/// Warp a normalized coordinate around `center`: values below the center
/// map into [0, 0.5], values above into [0.5, 1].
fn warp_around_center(t: f64, center: f64) -> f64 {
    if t < center {
        // center > 0 whenever this branch is reachable (t >= 0).
        0.5 * t / center
    } else if 1.0 - center > f64::EPSILON {
        0.5 + 0.5 * (t - center) / (1.0 - center)
    } else {
        1.0
    }
}

/// Per-vertex gradient color from a horizontal position on the outer
/// curve. A degenerate (zero-width) bounding box maps everything to the
/// gradient midpoint rather than dividing by zero.
pub fn gradient_color(
    start: Color,
    end: Color,
    gradient_center: f64,
    outer_bounds: &CurveBounds,
    x: f64,
) -> Color {
    let width = outer_bounds.width();
    let normalized = if width > f64::EPSILON {
        ((x - outer_bounds.min_x) / width).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let warped = warp_around_center(normalized, gradient_center);
    start.lerp(&end, warped as f32)
}
