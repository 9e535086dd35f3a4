//! Nest generation: concentric inward-scaled copies of a base curve.
//!
//! Every nest after the first is a uniform affine scale of its predecessor
//! toward one fixed convergence point. The per-step scale factor blends
//! from `start_scale` at the base size toward `end_scale` as the nest
//! approaches the minimum size, so the outer and inner extremes of the
//! stack can shrink at different rates.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bezier::Curve;
use crate::point::Point;

/// Hard cap on nest iterations. This is a defensive bound against
/// non-convergent configurations (scale >= 1, non-positive minimum size),
/// not an expected path.
pub const MAX_NEST_ITERATIONS: usize = 100;

/// Ordered sequence of nested curves, outermost (unscaled base) first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestSequence {
    pub curves: Vec<Curve>,
}

impl NestSequence {
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn outermost(&self) -> Option<&Curve> {
        self.curves.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Curve> {
        self.curves.iter()
    }

    /// Number of adjacent (outer, inner) curve pairs, i.e. rib layers.
    pub fn rib_pair_count(&self) -> usize {
        self.curves.len().saturating_sub(1)
    }
}

/// Generate the nest sequence for `base`.
///
/// The sequence always contains at least the base curve. The size check
/// runs before each append, so the last produced curve may already be
/// smaller than `min_size` but nothing is appended after it.
pub fn build_nests(
    base: &Curve,
    convergence: Point,
    start_scale: f64,
    end_scale: f64,
    min_size: f64,
) -> NestSequence {
    let mut curves = vec![base.clone()];
    let base_width = base.bounds().map(|b| b.width()).unwrap_or(0.0);

    let mut current = base.clone();
    let mut iterations = 0;
    loop {
        if iterations >= MAX_NEST_ITERATIONS {
            warn!(
                start_scale,
                end_scale, min_size, "nest generation hit iteration cap; check scale/min size"
            );
            break;
        }
        iterations += 1;

        let Some(bounds) = current.bounds() else {
            break;
        };
        let width = bounds.width();
        if width < min_size || bounds.height() < min_size {
            break;
        }

        // How far the current curve still is from the minimum size:
        // 1 at the base size, approaching 0 near the threshold.
        let t = if base_width > min_size {
            ((width - min_size) / (base_width - min_size)).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let scale = end_scale + (start_scale - end_scale) * t;

        let next = current.scaled_toward(convergence, scale);
        curves.push(next.clone());
        current = next;
    }

    NestSequence { curves }
}
