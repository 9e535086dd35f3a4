//! Closed Catmull-Rom spline construction.
//!
//! Converts an ordered cyclic control polygon into one cubic Bézier segment
//! per control point, using the uniform Catmull-Rom tangent rule with the
//! canonical fixed tension. Tension is intentionally not configurable.

use crate::bezier::{BezierSegment, Curve};
use crate::point::Point;

/// Minimum number of control points that yields a drawable loop.
pub const MIN_CONTROL_POINTS: usize = 3;

/// Build a smooth closed curve through the given control polygon.
///
/// Returns one segment per control point, with segment i running from
/// point i to point i+1 (mod N). Fewer than three points produce the
/// empty curve; callers treat that as "nothing to render", not an error.
pub fn build_spline(points: &[Point]) -> Curve {
    let n = points.len();
    if n < MIN_CONTROL_POINTS {
        return Curve::default();
    }

    let mut segments = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let curr = points[i];
        let next = points[(i + 1) % n];
        let after = points[(i + 2) % n];

        // Uniform Catmull-Rom tangents at the two segment ends.
        let t1 = (next - prev) * 0.5;
        let t2 = (after - curr) * 0.5;

        segments.push(BezierSegment::new(
            curr,
            curr + t1 * (1.0 / 3.0),
            next - t2 * (1.0 / 3.0),
            next,
        ));
    }
    Curve::new(segments)
}
