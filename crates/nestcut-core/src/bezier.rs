//! Cubic Bézier segments, closed curves, and control-hull bounds.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// One cubic Bézier segment: start point, two control points, end point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub p1: Point,
    pub c1: Point,
    pub c2: Point,
    pub p2: Point,
}

impl BezierSegment {
    pub fn new(p1: Point, c1: Point, c2: Point, p2: Point) -> Self {
        Self { p1, c1, c2, p2 }
    }

    /// Position at parameter `t` via the Bernstein basis.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point::new(
            b0 * self.p1.x + b1 * self.c1.x + b2 * self.c2.x + b3 * self.p2.x,
            b0 * self.p1.y + b1 * self.c1.y + b2 * self.c2.y + b3 * self.p2.y,
        )
    }

    /// First derivative at parameter `t`.
    pub fn derivative_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let d0 = 3.0 * u * u;
        let d1 = 6.0 * u * t;
        let d2 = 3.0 * t * t;
        Point::new(
            d0 * (self.c1.x - self.p1.x)
                + d1 * (self.c2.x - self.c1.x)
                + d2 * (self.p2.x - self.c2.x),
            d0 * (self.c1.y - self.p1.y)
                + d1 * (self.c2.y - self.c1.y)
                + d2 * (self.p2.y - self.c2.y),
        )
    }

    /// Affine scale of every defining point toward `center`.
    pub fn scaled_toward(&self, center: Point, factor: f64) -> Self {
        Self {
            p1: self.p1.scale_toward(center, factor),
            c1: self.c1.scale_toward(center, factor),
            c2: self.c2.scale_toward(center, factor),
            p2: self.p2.scale_toward(center, factor),
        }
    }

    /// Chord-length approximation of the segment length using `steps`
    /// uniform parameter subdivisions.
    pub fn approximate_length(&self, steps: usize) -> f64 {
        let mut length = 0.0;
        let mut prev = self.p1;
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let next = self.point_at(t);
            length += prev.distance_to(&next);
            prev = next;
        }
        length
    }
}

/// Axis-aligned bounds of a curve's control hull.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl CurveBounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Smallest box covering both boxes.
    pub fn union(&self, other: &CurveBounds) -> CurveBounds {
        CurveBounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Box grown by `padding` on every side.
    pub fn expanded(&self, padding: f64) -> CurveBounds {
        CurveBounds {
            min_x: self.min_x - padding,
            min_y: self.min_y - padding,
            max_x: self.max_x + padding,
            max_y: self.max_y + padding,
        }
    }
}

/// A closed loop of cubic Bézier segments.
///
/// Segment i's end point equals segment i+1's start point, cyclically. A
/// curve built from N control points has exactly N segments. The empty
/// curve is the "nothing to render" value used for degenerate input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub segments: Vec<BezierSegment>,
}

impl Curve {
    pub fn new(segments: Vec<BezierSegment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Control-hull bounding box: the box over all four points of every
    /// segment. Bézier curves lie within the convex hull of their control
    /// points, so this never underestimates the true extent. The nest
    /// termination rule depends on that property; do not tighten this to
    /// exact curve bounds.
    pub fn bounds(&self) -> Option<CurveBounds> {
        let first = self.segments.first()?;
        let mut bounds = CurveBounds {
            min_x: first.p1.x,
            min_y: first.p1.y,
            max_x: first.p1.x,
            max_y: first.p1.y,
        };
        for seg in &self.segments {
            bounds.include(seg.p1);
            bounds.include(seg.c1);
            bounds.include(seg.c2);
            bounds.include(seg.p2);
        }
        Some(bounds)
    }

    /// Affine scale of the whole loop toward `center`.
    pub fn scaled_toward(&self, center: Point, factor: f64) -> Curve {
        Curve::new(
            self.segments
                .iter()
                .map(|seg| seg.scaled_toward(center, factor))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_segment() -> BezierSegment {
        BezierSegment::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        )
    }

    #[test]
    fn test_point_at_endpoints() {
        let seg = unit_segment();
        assert_eq!(seg.point_at(0.0), seg.p1);
        assert_eq!(seg.point_at(1.0), seg.p2);
    }

    #[test]
    fn test_straight_segment_length() {
        // Evenly spaced collinear control points trace a straight line.
        let seg = unit_segment();
        let len = seg.approximate_length(20);
        assert!((len - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_derivative_direction() {
        let seg = unit_segment();
        let d = seg.derivative_at(0.5);
        assert!(d.x > 0.0);
        assert!(d.y.abs() < 1e-12);
    }

    #[test]
    fn test_bounds_cover_control_points() {
        let seg = BezierSegment::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 4.0),
            Point::new(2.0, -1.0),
            Point::new(3.0, 0.0),
        );
        let bounds = Curve::new(vec![seg]).bounds().unwrap();
        // Control hull, not curve extent: control points count even though
        // the curve never reaches y = 4.
        assert_eq!(bounds.min_y, -1.0);
        assert_eq!(bounds.max_y, 4.0);
        assert_eq!(bounds.width(), 3.0);
    }

    #[test]
    fn test_empty_curve_has_no_bounds() {
        assert!(Curve::default().bounds().is_none());
    }

    #[test]
    fn test_bounds_union_and_expand() {
        let a = CurveBounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 2.0,
            max_y: 1.0,
        };
        let b = CurveBounds {
            min_x: -1.0,
            min_y: 0.5,
            max_x: 1.0,
            max_y: 3.0,
        };
        let u = a.union(&b);
        assert_eq!((u.min_x, u.min_y, u.max_x, u.max_y), (-1.0, 0.0, 2.0, 3.0));
        let e = u.expanded(0.5);
        assert_eq!(e.width(), u.width() + 1.0);
        assert_eq!(e.height(), u.height() + 1.0);
    }

    #[test]
    fn test_scaled_toward_moves_all_points() {
        let curve = Curve::new(vec![unit_segment()]);
        let center = Point::new(0.0, 0.0);
        let scaled = curve.scaled_toward(center, 0.5);
        assert_eq!(scaled.segments[0].p2, Point::new(1.5, 0.0));
        assert_eq!(scaled.segments[0].c1, Point::new(0.5, 0.0));
    }
}
