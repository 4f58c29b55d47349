//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the board:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: Parametric primitives (line, rectangle, circle, ...) with hit-testing
//! - [`InkLayer`] and [`RasterSnapshot`]: the freehand pixel layer and its copies
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod raster;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::Color;
pub use raster::{InkLayer, RasterSnapshot, SurfaceError};
pub use render::{render_board, render_shape, render_shapes};
pub use shape::{Shape, ShapeDefaults, ShapeKind};
