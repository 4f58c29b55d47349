mod actions;
mod core;
mod mouse;
mod render;

pub use core::{DrawingSurface, GestureState, SurfaceSettings, THICKNESS_RANGE, TransformIntent};
