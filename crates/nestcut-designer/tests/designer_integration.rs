//! Integration tests for the designer state and SVG output.

use nestcut_core::Point;
use nestcut_designer::{
    curve_to_path_data, export_document, DesignSnapshot, DesignerState, EXPORT_PADDING_IN,
};

#[test]
fn test_edit_session_workflow() {
    let mut state = DesignerState::new();
    let initial_nests = state.nests().len();
    assert!(initial_nests > 1);

    // Drag a vertex outward; the base curve and all nests follow.
    state.move_point(2, Point::new(10.0, 5.0));
    let outer = state.nests().outermost().unwrap().bounds().unwrap();
    assert!(outer.max_x >= 10.0);

    // Insert a point near an edge, then move the convergence point.
    state.insert_point(Point::new(4.0, 3.0));
    assert_eq!(state.nests().outermost().unwrap().len(), 5);

    state.set_convergence(Point::new(4.0, 5.0));
    // Inner nests collapse toward the new convergence point.
    let innermost = state.nests().curves.last().unwrap().bounds().unwrap();
    let cx = (innermost.min_x + innermost.max_x) / 2.0;
    assert!((cx - 4.0).abs() < 1.0);
}

#[test]
fn test_degenerate_polygon_renders_nothing() {
    let snapshot = DesignSnapshot {
        control_points: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
        ..Default::default()
    };
    assert!(snapshot.validate().is_err());

    let state = DesignerState::with_snapshot(snapshot);
    assert_eq!(state.nests().len(), 1);
    assert_eq!(
        curve_to_path_data(state.nests().outermost().unwrap()),
        ""
    );
    assert!(export_document(state.nests(), EXPORT_PADDING_IN).is_none());
}

#[test]
fn test_export_document_covers_all_nests() {
    let state = DesignerState::new();
    let svg = export_document(state.nests(), EXPORT_PADDING_IN).unwrap();
    assert_eq!(svg.matches("<path").count(), state.nests().len());
    assert!(svg.contains("in\""));
}
