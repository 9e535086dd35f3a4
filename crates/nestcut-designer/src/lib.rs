//! # NestCut Designer
//!
//! Design-state management and 2D output for the nesting engine:
//!
//! - **Snapshot + recompute**: the editor mutates a [`DesignerState`];
//!   every mutation snapshots the configuration and reruns the full
//!   spline -> nests pipeline synchronously. No observers, no partial
//!   updates — a later edit simply supersedes an earlier result.
//! - **SVG rendering**: path-data serialization for the on-screen canvas
//!   and the standalone inch-sized export document.
//!
//! Event wiring, widgets, and file dialogs live outside this crate.

pub mod design_state;
pub mod svg_renderer;

pub use design_state::{recompute, DesignSnapshot, DesignerState};
pub use svg_renderer::{
    curve_to_path_data, export_document, export_frame, render_nest_paths, EXPORT_PADDING_IN,
};
