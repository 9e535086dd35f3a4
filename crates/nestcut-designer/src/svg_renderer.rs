//! SVG path rendering for nest sequences.
//!
//! Produces the path-data strings the 2D canvas draws directly, plus the
//! padded-frame computation and standalone document used when handing a
//! design to a cutter. Coordinates are inches, 4 decimal places.

use std::fmt::Write;

use nestcut_core::{Curve, CurveBounds, NestSequence};

/// Default padding around exported artwork, in inches.
pub const EXPORT_PADDING_IN: f64 = 0.25;

/// Serialize one closed curve as SVG path data.
///
/// Format: `M x y` at the first segment's start, then one
/// `C c1x c1y, c2x c2y, p2x p2y` per segment, closed with `Z`.
/// The empty curve serializes to the empty string.
pub fn curve_to_path_data(curve: &Curve) -> String {
    let Some(first) = curve.segments.first() else {
        return String::new();
    };

    let mut d = String::new();
    let _ = write!(d, "M {:.4} {:.4}", first.p1.x, first.p1.y);
    for seg in &curve.segments {
        let _ = write!(
            d,
            " C {:.4} {:.4}, {:.4} {:.4}, {:.4} {:.4}",
            seg.c1.x, seg.c1.y, seg.c2.x, seg.c2.y, seg.p2.x, seg.p2.y
        );
    }
    d.push_str(" Z");
    d
}

/// Path data for every nest, outermost first. Empty curves are skipped.
pub fn render_nest_paths(nests: &NestSequence) -> Vec<String> {
    nests
        .iter()
        .filter(|curve| !curve.is_empty())
        .map(curve_to_path_data)
        .collect()
}

/// Padded bounding box over all nests.
///
/// The outermost curve dominates the union in practice, but inner nests
/// are included so an off-center convergence point can never push
/// artwork outside the frame. `None` when nothing is drawable.
pub fn export_frame(nests: &NestSequence, padding: f64) -> Option<CurveBounds> {
    nests
        .iter()
        .filter_map(|curve| curve.bounds())
        .reduce(|a, b| a.union(&b))
        .map(|bounds| bounds.expanded(padding))
}

/// Standalone SVG document: every nest as a stroked, unfilled path,
/// sized in physical inches.
pub fn export_document(nests: &NestSequence, padding: f64) -> Option<String> {
    let frame = export_frame(nests, padding)?;
    let width = frame.width();
    let height = frame.height();

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.4}in" height="{:.4}in" viewBox="{:.4} {:.4} {:.4} {:.4}">"#,
        width, height, frame.min_x, frame.min_y, width, height
    );
    svg.push('\n');
    for d in render_nest_paths(nests) {
        let _ = write!(
            svg,
            r#"  <path d="{}" fill="none" stroke="black" stroke-width="0.01"/>"#,
            d
        );
        svg.push('\n');
    }
    svg.push_str("</svg>\n");
    Some(svg)
}
