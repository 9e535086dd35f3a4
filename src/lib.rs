//! # NestCut
//!
//! Interactive editor engine for laser-cut layered artwork: sketch a
//! closed organic outline, derive a family of concentric inward-scaled
//! "nests" of it, and preview the result as a stack of rotated,
//! extruded rib layers.
//!
//! ## Architecture
//!
//! NestCut is organized as a workspace with multiple crates:
//!
//! 1. **nestcut-core** - geometry engine: splines, nests, bounds,
//!    arc-length sampling
//! 2. **nestcut-designer** - design snapshots, recompute pipeline, SVG
//!    path rendering and export framing
//! 3. **nestcut-visualizer** - rib layer composition for the 3D preview
//! 4. **nestcut** - main binary that integrates all crates
//!
//! The editing UI, the 3D viewport, and file dialogs are external
//! collaborators; they consume the values these crates produce.

pub use nestcut_designer as designer;
pub use nestcut_visualizer as visualizer;

pub use nestcut_core::{
    build_nests, build_spline, nearest_segment_index, sample_at, BezierSegment, Curve,
    CurveBounds, DesignError, NestSequence, PathSample, Point, MAX_NEST_ITERATIONS,
    MIN_CONTROL_POINTS,
};

pub use nestcut_designer::{
    curve_to_path_data, export_document, export_frame, recompute, render_nest_paths,
    DesignSnapshot, DesignerState, EXPORT_PADDING_IN,
};

pub use nestcut_visualizer::{composite_layers, Color, LayerConfig, PivotAlignment, RibLayer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG
/// environment variable support. Logs go to stderr so piped SVG output
/// stays clean.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
