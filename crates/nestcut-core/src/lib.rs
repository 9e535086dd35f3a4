//! # NestCut Core
//!
//! Geometry engine for laser-cut layered artwork: smooth closed splines
//! from sparse control polygons, concentric inward-scaled "nests" of the
//! resulting curve, and arc-length parameterized sampling along it.
//!
//! ## Pipeline
//!
//! ```text
//! ControlPolygon (ordered cyclic points)
//!   └── build_spline        Catmull-Rom -> cubic Bézier loop
//!         └── build_nests   affine scaling toward a convergence point
//!               └── sample_at   arc-length position/tangent/normal
//! ```
//!
//! Everything is a value type recomputed from scratch on each state
//! change; there is no incremental update and no shared mutable state.
//! Degenerate input degrades silently (empty curves, absent samples)
//! rather than raising faults, since a geometry recompute must never
//! crash an interactive editing session.

pub mod bezier;
pub mod editing;
pub mod error;
pub mod nest;
pub mod point;
pub mod sample;
pub mod spline;
pub mod units;

pub use bezier::{BezierSegment, Curve, CurveBounds};
pub use editing::nearest_segment_index;
pub use error::{DesignError, Result};
pub use nest::{build_nests, NestSequence, MAX_NEST_ITERATIONS};
pub use point::Point;
pub use sample::{sample_at, PathSample};
pub use spline::{build_spline, MIN_CONTROL_POINTS};
pub use units::{format_length, parse_length, MeasurementSystem};
