//! Property tests for spline closure and convergence-point scaling.

use nestcut_core::{build_spline, Point};
use proptest::prelude::*;

/// Arbitrary convex-ish polygon: 3..=12 points on a jittered circle.
fn polygon_strategy() -> impl Strategy<Value = Vec<Point>> {
    (3usize..=12, 0.5f64..4.0, proptest::collection::vec(0.8f64..1.2, 12)).prop_map(
        |(n, radius, jitter)| {
            (0..n)
                .map(|i| {
                    let angle = i as f64 / n as f64 * std::f64::consts::TAU;
                    let r = radius * jitter[i];
                    Point::new(5.0 + r * angle.cos(), 5.0 + r * angle.sin())
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_spline_closure(points in polygon_strategy()) {
        let curve = build_spline(&points);
        prop_assert_eq!(curve.len(), points.len());
        let n = curve.len();
        for i in 0..n {
            prop_assert_eq!(curve.segments[i].p2, curve.segments[(i + 1) % n].p1);
            prop_assert_eq!(curve.segments[i].p1, points[i]);
        }
    }

    #[test]
    fn prop_scaling_identity(
        points in polygon_strategy(),
        cx in -10.0f64..10.0,
        cy in -10.0f64..10.0,
        s in 0.1f64..1.0,
    ) {
        let center = Point::new(cx, cy);
        let curve = build_spline(&points);
        let scaled = curve.scaled_toward(center, s);
        for (orig, new) in curve.segments.iter().zip(&scaled.segments) {
            let expected = Point::new(
                center.x + s * (orig.p1.x - center.x),
                center.y + s * (orig.p1.y - center.y),
            );
            prop_assert!(new.p1.distance_to(&expected) < 1e-9);
        }
        // The convergence point itself is a fixed point of the map.
        prop_assert_eq!(center.scale_toward(center, s), center);
    }
}
