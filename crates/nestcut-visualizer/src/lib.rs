//! # NestCut Visualizer
//!
//! Turns a nest sequence into the stacked, rotated rib layers shown in
//! the 3D preview. Consumes the core geometry pipeline; produces flat
//! shapes-with-holes plus per-layer transforms and gradient colors. Mesh
//! construction, materials, camera, and lighting belong to the external
//! scene builder.

pub mod color;
pub mod compositor;

pub use color::{gradient_color, Color};
pub use compositor::{composite_layers, LayerConfig, PivotAlignment, RibLayer};
