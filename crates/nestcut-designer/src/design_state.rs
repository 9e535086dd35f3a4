//! Design state manager for UI integration.
//!
//! The UI owns events and widgets; this module owns the data. All editor
//! mutations funnel through [`DesignerState`], which snapshots the current
//! configuration and reruns the whole pipeline synchronously. There is no
//! observer bus and no incremental update: only the latest state matters,
//! and a full recompute is cheap at this scale.

use serde::{Deserialize, Serialize};
use tracing::debug;

use nestcut_core::{
    build_nests, build_spline, nearest_segment_index, DesignError, NestSequence, Point,
    MIN_CONTROL_POINTS,
};

/// Immutable configuration record consumed by one recompute pass.
///
/// A snapshot is plain data; the pipeline never reaches back into live
/// editor state while running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSnapshot {
    /// Ordered cyclic control polygon, in inches.
    pub control_points: Vec<Point>,
    /// Fixed point all nests are scaled toward.
    pub convergence: Point,
    /// Per-step shrink ratio at the outermost nest.
    pub start_scale: f64,
    /// Per-step shrink ratio as nests approach the minimum size.
    pub end_scale: f64,
    /// Stop once a nest's bounding width or height falls below this.
    pub min_size: f64,
}

impl Default for DesignSnapshot {
    fn default() -> Self {
        // Diamond starter shape, convergence at its center.
        Self {
            control_points: vec![
                Point::new(2.0, 5.0),
                Point::new(5.0, 2.0),
                Point::new(8.0, 5.0),
                Point::new(5.0, 8.0),
            ],
            convergence: Point::new(5.0, 5.0),
            start_scale: 0.9,
            end_scale: 0.9,
            min_size: 0.25,
        }
    }
}

impl DesignSnapshot {
    /// Check the snapshot against the ranges the generator assumes.
    ///
    /// Geometry functions tolerate bad values (empty curve, iteration
    /// cap); validation exists so the UI can reject them up front.
    pub fn validate(&self) -> nestcut_core::Result<()> {
        if self.control_points.len() < MIN_CONTROL_POINTS {
            return Err(DesignError::TooFewControlPoints {
                count: self.control_points.len(),
            });
        }
        for (which, value) in [("start", self.start_scale), ("end", self.end_scale)] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(DesignError::ScaleOutOfRange { which, value });
            }
        }
        if !(self.min_size > 0.0) {
            return Err(DesignError::NonPositiveMinSize {
                value: self.min_size,
            });
        }
        Ok(())
    }
}

/// Run the full spline -> nests pipeline for one snapshot.
///
/// Pure function of its input. Degenerate snapshots produce a sequence
/// holding only the (possibly empty) base curve.
pub fn recompute(snapshot: &DesignSnapshot) -> NestSequence {
    let curve = build_spline(&snapshot.control_points);
    let nests = build_nests(
        &curve,
        snapshot.convergence,
        snapshot.start_scale,
        snapshot.end_scale,
        snapshot.min_size,
    );
    debug!(
        points = snapshot.control_points.len(),
        nests = nests.len(),
        "recomputed nest sequence"
    );
    nests
}

/// Editor-facing state: current snapshot plus cached pipeline outputs.
#[derive(Debug, Clone)]
pub struct DesignerState {
    snapshot: DesignSnapshot,
    nests: NestSequence,
}

impl DesignerState {
    pub fn new() -> Self {
        Self::with_snapshot(DesignSnapshot::default())
    }

    pub fn with_snapshot(snapshot: DesignSnapshot) -> Self {
        let nests = recompute(&snapshot);
        Self { snapshot, nests }
    }

    pub fn snapshot(&self) -> &DesignSnapshot {
        &self.snapshot
    }

    /// Latest nest sequence; recomputed on every mutation.
    pub fn nests(&self) -> &NestSequence {
        &self.nests
    }

    fn recompute_now(&mut self) {
        self.nests = recompute(&self.snapshot);
    }

    pub fn set_convergence(&mut self, point: Point) {
        self.snapshot.convergence = point;
        self.recompute_now();
    }

    pub fn set_scales(&mut self, start_scale: f64, end_scale: f64) {
        self.snapshot.start_scale = start_scale;
        self.snapshot.end_scale = end_scale;
        self.recompute_now();
    }

    pub fn set_min_size(&mut self, min_size: f64) {
        self.snapshot.min_size = min_size;
        self.recompute_now();
    }

    pub fn set_control_points(&mut self, points: Vec<Point>) {
        self.snapshot.control_points = points;
        self.recompute_now();
    }

    /// Move one control point; out-of-range indices are ignored.
    pub fn move_point(&mut self, index: usize, position: Point) {
        if let Some(p) = self.snapshot.control_points.get_mut(index) {
            *p = position;
            self.recompute_now();
        }
    }

    /// Insert a point on the nearest polygon edge. Returns the index the
    /// point ended up at.
    pub fn insert_point(&mut self, position: Point) -> usize {
        let index = match nearest_segment_index(&self.snapshot.control_points, position) {
            Some(edge) => edge + 1,
            None => self.snapshot.control_points.len(),
        };
        self.snapshot.control_points.insert(index, position);
        self.recompute_now();
        index
    }

    /// Remove a control point, refusing to drop below a drawable loop.
    pub fn remove_point(&mut self, index: usize) -> bool {
        if self.snapshot.control_points.len() <= MIN_CONTROL_POINTS
            || index >= self.snapshot.control_points.len()
        {
            return false;
        }
        self.snapshot.control_points.remove(index);
        self.recompute_now();
        true
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_valid() {
        let snapshot = DesignSnapshot::default();
        assert!(snapshot.validate().is_ok());
        let nests = recompute(&snapshot);
        assert!(nests.len() > 1);
    }

    #[test]
    fn test_validation_rejections() {
        let mut snapshot = DesignSnapshot::default();
        snapshot.control_points.truncate(2);
        assert_eq!(
            snapshot.validate(),
            Err(DesignError::TooFewControlPoints { count: 2 })
        );

        let snapshot = DesignSnapshot {
            start_scale: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            snapshot.validate(),
            Err(DesignError::ScaleOutOfRange { which: "start", .. })
        ));

        let snapshot = DesignSnapshot {
            min_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            snapshot.validate(),
            Err(DesignError::NonPositiveMinSize { .. })
        ));
    }

    #[test]
    fn test_mutations_recompute() {
        let mut state = DesignerState::new();
        let before = state.nests().len();

        // A coarser minimum size means fewer nests.
        state.set_min_size(3.0);
        assert!(state.nests().len() < before);

        state.set_scales(0.5, 0.5);
        for pair in state.nests().curves.windows(2) {
            let outer = pair[0].bounds().unwrap().width();
            let inner = pair[1].bounds().unwrap().width();
            assert!(inner < outer * 0.51);
        }
    }

    #[test]
    fn test_insert_point_on_nearest_edge() {
        let mut state = DesignerState::new();
        // Near the edge between points 0 (2,5) and 1 (5,2).
        let index = state.insert_point(Point::new(3.5, 3.5));
        assert_eq!(index, 1);
        assert_eq!(state.snapshot().control_points.len(), 5);
        assert_eq!(state.nests().outermost().unwrap().len(), 5);
    }

    #[test]
    fn test_remove_point_floor() {
        let mut state = DesignerState::new();
        assert!(state.remove_point(0));
        assert_eq!(state.snapshot().control_points.len(), 3);
        // At three points removal is refused.
        assert!(!state.remove_point(0));
        assert_eq!(state.snapshot().control_points.len(), 3);
    }

    #[test]
    fn test_snapshot_round_trips_as_json() {
        let snapshot = DesignSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: DesignSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
