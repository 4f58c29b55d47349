//! Generic pointer event types.

use serde::Deserialize;

/// Mouse button identification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (draw, create or transform)
    #[default]
    Left,
    /// Right mouse button (context menu: delete the shape under the pointer)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
