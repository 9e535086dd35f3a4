//! Geometry helpers for the interactive editor.
//!
//! The editor itself (event wiring, dragging) lives outside this crate;
//! only the pure hit-testing math belongs here.

use crate::point::Point;

/// Index of the control-polygon edge closest to `candidate`.
///
/// Edges are the cyclic chords between consecutive control points; the new
/// point is inserted after the returned index. Distance is true
/// point-to-segment distance, and the first minimum in forward index order
/// wins. Returns `None` for polygons with fewer than two points.
pub fn nearest_segment_index(points: &[Point], candidate: Point) -> Option<usize> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len();
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let d = point_segment_distance(candidate, a, b);
        if d < best_distance {
            best_distance = d;
            best_index = i;
        }
    }
    Some(best_index)
}

fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq <= f64::EPSILON {
        return p.distance_to(&a);
    }
    let ap = p - a;
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&a.lerp(&b, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_picks_adjacent_edge() {
        // Near the bottom edge (between points 0 and 1).
        assert_eq!(
            nearest_segment_index(&square(), Point::new(5.0, -0.5)),
            Some(0)
        );
        // Near the closing edge (between points 3 and 0).
        assert_eq!(
            nearest_segment_index(&square(), Point::new(-0.5, 5.0)),
            Some(3)
        );
    }

    #[test]
    fn test_tie_breaks_to_first_edge() {
        // The exact center is equidistant from all four edges.
        assert_eq!(
            nearest_segment_index(&square(), Point::new(5.0, 5.0)),
            Some(0)
        );
    }

    #[test]
    fn test_degenerate_polygons() {
        assert_eq!(nearest_segment_index(&[], Point::ORIGIN), None);
        assert_eq!(
            nearest_segment_index(&[Point::new(1.0, 1.0)], Point::ORIGIN),
            None
        );
    }

    #[test]
    fn test_distance_clamps_to_endpoints() {
        // Beyond the segment ends the nearest feature is a vertex.
        let d = point_segment_distance(
            Point::new(-3.0, 4.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 5.0).abs() < 1e-12);
    }
}
