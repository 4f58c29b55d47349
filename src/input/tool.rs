//! Drawing tool selection.

use crate::draw::ShapeKind;
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool decides what a primary-button drag on empty canvas does.
/// Drags that start on an existing shape always transform it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand ink in the current color (default)
    Pencil,
    /// Freehand ink in the board background color
    Eraser,
    /// Drag out a parametric shape
    Shape(ShapeKind),
}

impl Tool {
    /// Returns true for the tools that paint directly into the ink layer.
    pub fn is_freehand(&self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Pencil
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Pencil => f.write_str("pencil"),
            Tool::Eraser => f.write_str("eraser"),
            Tool::Shape(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pencil" | "pen" => Ok(Tool::Pencil),
            "eraser" => Ok(Tool::Eraser),
            other => other
                .parse::<ShapeKind>()
                .map(Tool::Shape)
                .map_err(|_| format!("unknown tool '{s}'")),
        }
    }
}
