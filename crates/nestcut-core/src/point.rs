//! 2D point type used throughout the geometry pipeline.
//!
//! Coordinates are physical inches. Points are plain values with no
//! identity; every pipeline stage copies them freely.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point (or vector) in inches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Linear interpolation from `self` to `other` at parameter `t`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Affine scale toward a fixed center: `C + s * (P - C)`.
    ///
    /// The center is a fixed point of the map for every scale factor.
    pub fn scale_toward(&self, center: Point, factor: f64) -> Point {
        Point::new(
            center.x + (self.x - center.x) * factor,
            center.y + (self.y - center.y) * factor,
        )
    }

    /// Unit-length copy. Degenerate (near-zero) vectors fall back to the
    /// unit X axis so downstream rotation math never sees NaN.
    pub fn normalized(&self) -> Point {
        let len = self.length();
        if len <= f64::EPSILON {
            return Point::new(1.0, 0.0);
        }
        Point::new(self.x / len, self.y / len)
    }

    /// Perpendicular vector, (x, y) -> (-y, x).
    pub fn perpendicular(&self) -> Point {
        Point::new(-self.y, self.x)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}
