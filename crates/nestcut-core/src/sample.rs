//! Arc-length parameterized sampling of closed curves.
//!
//! Positions on a curve are addressed by a normalized fraction of total
//! perimeter length rather than raw spline parameter. Lengths come from a
//! two-level chord subdivision: a coarse pass locates the containing
//! segment, a finer pass inverts the length inside it. Not exact arc
//! length, but convergent and stable for this shape class.

use serde::{Deserialize, Serialize};

use crate::bezier::{BezierSegment, Curve};
use crate::point::Point;

/// Chord steps per segment for the whole-curve length pass.
const COARSE_STEPS: usize = 20;

/// Chord steps for the within-segment inverse search.
const FINE_STEPS: usize = 40;

/// A point on a curve with its local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSample {
    pub position: Point,
    /// Unit tangent along the direction of travel.
    pub tangent: Point,
    /// Unit normal, tangent rotated (x, y) -> (-y, x).
    pub normal: Point,
}

/// Sample the curve at normalized arc-length position `s`.
///
/// Any real `s` is accepted; values outside [0, 1) wrap cyclically.
/// Returns `None` for the empty curve — callers fall back to a default
/// pivot rather than treating this as an error.
pub fn sample_at(curve: &Curve, s: f64) -> Option<PathSample> {
    if curve.is_empty() {
        return None;
    }

    let s = wrap_unit(s);

    let lengths: Vec<f64> = curve
        .segments
        .iter()
        .map(|seg| seg.approximate_length(COARSE_STEPS))
        .collect();
    let total: f64 = lengths.iter().sum();
    let target = s * total;

    // First segment whose cumulative length reaches the target holds the
    // sample; forward index order breaks ties.
    let mut accumulated = 0.0;
    let mut index = curve.segments.len() - 1;
    let mut residual = 0.0;
    for (i, len) in lengths.iter().enumerate() {
        if accumulated + len >= target {
            index = i;
            residual = target - accumulated;
            break;
        }
        accumulated += len;
    }

    let segment = &curve.segments[index];
    let t = invert_length(segment, residual);

    let tangent = segment.derivative_at(t).normalized();
    Some(PathSample {
        position: segment.point_at(t),
        tangent,
        normal: tangent.perpendicular(),
    })
}

/// Wrap any real into [0, 1).
fn wrap_unit(s: f64) -> f64 {
    let wrapped = s.rem_euclid(1.0);
    if wrapped.is_nan() {
        0.0
    } else {
        wrapped
    }
}

/// Walk the segment at fine resolution until the accumulated chord length
/// reaches `residual`, interpolating t between the bracketing steps.
///
/// If the walk never reaches the residual (floating-point shortfall at the
/// segment end, s near 1), t stays 0 — the caller still gets a valid
/// sample at the segment start.
fn invert_length(segment: &BezierSegment, residual: f64) -> f64 {
    let mut accumulated = 0.0;
    let mut prev = segment.p1;
    let mut t = 0.0;
    for i in 1..=FINE_STEPS {
        let step_t = i as f64 / FINE_STEPS as f64;
        let next = segment.point_at(step_t);
        let chord = prev.distance_to(&next);
        if accumulated + chord >= residual {
            let prev_t = (i - 1) as f64 / FINE_STEPS as f64;
            let overshoot = if chord > 0.0 {
                (residual - accumulated) / chord
            } else {
                0.0
            };
            t = prev_t + (step_t - prev_t) * overshoot;
            break;
        }
        accumulated += chord;
        prev = next;
    }
    t
}
