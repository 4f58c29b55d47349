//! Input handling and gesture state machine.
//!
//! This module translates pointer events into drawing actions. It owns the
//! drawing surface, the current tool state (tool, color, width) and the state
//! machine that routes each gesture to freehand ink, shape creation or shape
//! transformation.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::MouseButton;
pub use modifiers::Modifiers;
pub use state::{DrawingSurface, GestureState, SurfaceSettings, TransformIntent};
pub use tool::Tool;
