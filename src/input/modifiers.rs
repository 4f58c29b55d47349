//! Keyboard modifier state tracking.

use serde::Deserialize;

/// Keyboard modifier state.
///
/// Alt at pointer-down marks a transform as an explicit "modify" gesture;
/// Shift while dragging a selected shape resizes it instead of moving it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Modifiers {
    /// Shift key pressed
    #[serde(default)]
    pub shift: bool,
    /// Ctrl key pressed
    #[serde(default)]
    pub ctrl: bool,
    /// Alt key pressed
    #[serde(default)]
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a transform drag should resize rather than move.
    pub fn resizing(&self) -> bool {
        self.shift
    }
}
