//! Rib layer composition for the 3D preview.
//!
//! Each pair of adjacent nests becomes one flat "rib" — the outer curve
//! with the inner curve as a hole — stacked at a vertical offset and
//! rotated about a pivot sampled on the curve by arc length. The external
//! scene builder extrudes the resulting shapes; this module only produces
//! geometry and transforms.

use glam::{DMat4, DVec3};
use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;

use nestcut_core::{sample_at, Curve, NestSequence, Point};

use crate::color::{gradient_color, Color};

/// How layer pivots are located along the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotAlignment {
    /// One pivot sampled once at `pivot_start` on the outermost curve and
    /// shared by every layer, so all pivots stack vertically.
    Global,
    /// Each layer samples its own outer curve, interpolating from
    /// `pivot_start` to `pivot_end` as the stack rises, so the pivot
    /// walks along the boundary.
    PerLayer,
}

impl Default for PivotAlignment {
    fn default() -> Self {
        Self::Global
    }
}

/// Configuration for one compositing pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Material thickness; also the vertical step between layers, inches.
    pub thickness: f64,
    /// Rotation added per layer, degrees about the stacking axis.
    pub rotation_deg: f64,
    /// Normalized arc-length position of the pivot on the first layer.
    pub pivot_start: f64,
    /// Pivot position on the last layer (`PerLayer` mode only).
    pub pivot_end: f64,
    pub alignment: PivotAlignment,
    /// Horizontal gradient center in [0, 1].
    pub gradient_center: f64,
    pub color_start: Color,
    pub color_end: Color,
    /// Flat color for extruded side faces.
    pub color_sides: Color,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            thickness: 0.125,
            rotation_deg: 0.0,
            pivot_start: 0.0,
            pivot_end: 0.0,
            alignment: PivotAlignment::default(),
            gradient_center: 0.5,
            color_start: Color::new(0.85, 0.30, 0.20),
            color_end: Color::new(0.95, 0.80, 0.30),
            color_sides: Color::new(0.35, 0.22, 0.15),
        }
    }
}

impl LayerConfig {
    pub fn validate(&self) -> nestcut_core::Result<()> {
        if !(self.thickness > 0.0) {
            return Err(nestcut_core::DesignError::NonPositiveThickness {
                value: self.thickness,
            });
        }
        Ok(())
    }
}

/// One flat ring between two adjacent nests, with its stacking transform.
///
/// Rebuilt from scratch on every render pass; carries no identity across
/// frames and is never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct RibLayer {
    /// Outer boundary in untransformed design coordinates.
    pub outer: Curve,
    /// Inner hole in untransformed design coordinates.
    pub inner: Curve,
    pub vertical_offset: f64,
    /// Accumulated rotation about the stacking axis, radians.
    pub rotation_rad: f64,
    /// World-space pivot the layer rotates about, including the vertical
    /// offset.
    pub pivot: DVec3,
    /// Full composed transform: translate the pivot to the origin, rotate
    /// about the stacking axis, translate to the pivot plus offset.
    pub transform: DMat4,
}

impl RibLayer {
    /// Apply the layer transform to a design-plane point.
    pub fn transform_point(&self, p: Point) -> DVec3 {
        self.transform.transform_point3(DVec3::new(p.x, p.y, 0.0))
    }

    /// Gradient color for a vertex at horizontal design position `x`,
    /// normalized against this layer's outer bounds.
    pub fn top_face_color(&self, config: &LayerConfig, x: f64) -> Color {
        match self.outer.bounds() {
            Some(bounds) => gradient_color(
                config.color_start,
                config.color_end,
                config.gradient_center,
                &bounds,
                x,
            ),
            None => config.color_start.lerp(&config.color_end, 0.5),
        }
    }

    /// Shape-with-hole as a lyon path: outer loop plus inner loop, both
    /// closed, ready for tessellation and extrusion.
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        for curve in [&self.outer, &self.inner] {
            let Some(first) = curve.segments.first() else {
                continue;
            };
            builder.begin(point(first.p1.x as f32, first.p1.y as f32));
            for seg in &curve.segments {
                builder.cubic_bezier_to(
                    point(seg.c1.x as f32, seg.c1.y as f32),
                    point(seg.c2.x as f32, seg.c2.y as f32),
                    point(seg.p2.x as f32, seg.p2.y as f32),
                );
            }
            builder.end(true);
        }
        builder.build()
    }
}

/// Build one rib per adjacent nest pair.
///
/// A sequence of M nests yields exactly M-1 ribs; fewer than two nests
/// yield none. A failed pivot sample (empty curve) falls back to the
/// origin so the layer is still produced.
pub fn composite_layers(nests: &NestSequence, config: &LayerConfig) -> Vec<RibLayer> {
    let count = nests.len();
    if count < 2 {
        return Vec::new();
    }

    let global_pivot = match config.alignment {
        PivotAlignment::Global => nests
            .outermost()
            .and_then(|curve| sample_at(curve, config.pivot_start))
            .map(|sample| sample.position),
        PivotAlignment::PerLayer => None,
    };

    let layer_count = count - 1;
    let mut layers = Vec::with_capacity(layer_count);
    for k in 0..layer_count {
        let outer = &nests.curves[k];
        let inner = &nests.curves[k + 1];

        let pivot2d = match config.alignment {
            PivotAlignment::Global => global_pivot,
            PivotAlignment::PerLayer => {
                let t_rib = k as f64 / (count.saturating_sub(2).max(1)) as f64;
                let s = config.pivot_start + (config.pivot_end - config.pivot_start) * t_rib;
                sample_at(outer, s).map(|sample| sample.position)
            }
        }
        .unwrap_or(Point::ORIGIN);

        let vertical_offset = k as f64 * config.thickness;
        let rotation_rad = (k as f64 * config.rotation_deg).to_radians();

        let pivot = DVec3::new(pivot2d.x, pivot2d.y, vertical_offset);
        let transform = DMat4::from_translation(pivot)
            * DMat4::from_rotation_z(rotation_rad)
            * DMat4::from_translation(DVec3::new(-pivot2d.x, -pivot2d.y, 0.0));

        layers.push(RibLayer {
            outer: outer.clone(),
            inner: inner.clone(),
            vertical_offset,
            rotation_rad,
            pivot,
            transform,
        });
    }

    debug!(layers = layers.len(), alignment = ?config.alignment, "composited rib layers");
    layers
}
