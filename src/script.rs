//! JSON gesture scripts.
//!
//! A script is a JSON array of steps, each tagged by `action`:
//!
//! ```json
//! [
//!   { "action": "tool", "tool": "rectangle" },
//!   { "action": "color", "color": "#ff0000" },
//!   { "action": "press", "x": 10, "y": 10 },
//!   { "action": "move", "x": 60, "y": 40 },
//!   { "action": "release", "x": 100, "y": 80 },
//!   { "action": "export" }
//! ]
//! ```
//!
//! Replaying a script feeds the steps to a [`DrawingSurface`] exactly as the
//! pointer and toolbar would.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use serde::Deserialize;

use crate::config::ColorSpec;
use crate::export::ExportSettings;
use crate::input::{DrawingSurface, Modifiers, MouseButton, Tool};

/// One scripted input event or toolbar action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ScriptStep {
    /// Select a tool by name (`pencil`, `eraser` or a shape kind)
    Tool { tool: String },
    /// Set the stroke color
    Color { color: ColorSpec },
    /// Set the stroke width
    Width { width: f64 },
    /// Pointer button down
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer motion
    Move { x: f64, y: f64 },
    /// Pointer button up
    Release {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer left the canvas
    Leave,
    /// Context menu request at a position
    ContextMenu { x: f64, y: f64 },
    /// Replace the held modifier keys
    Modifiers {
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
    },
    Undo,
    Redo,
    DeleteSelected,
    /// Wipe shapes and ink
    Clear,
    /// Export the board, to `path` or the configured location
    Export {
        #[serde(default)]
        path: Option<PathBuf>,
    },
}

/// Parses a script from JSON text.
pub fn parse_script(json: &str) -> Result<Vec<ScriptStep>> {
    serde_json::from_str(json).context("Failed to parse gesture script")
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script from {}", path.display()))?;
    let steps = parse_script(&json)
        .with_context(|| format!("Invalid script {}", path.display()))?;
    info!("Loaded {} script steps from {}", steps.len(), path.display());
    Ok(steps)
}

/// Applies `steps` in order. Returns the paths written by `export` steps.
///
/// # Errors
/// Fails on unknown tool or color names and on export failures, naming the
/// offending step.
pub fn replay(
    surface: &mut DrawingSurface,
    steps: &[ScriptStep],
    export: &ExportSettings,
) -> Result<Vec<PathBuf>> {
    let mut exported = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        debug!("Step {index}: {step:?}");
        apply_step(surface, step, export, &mut exported)
            .with_context(|| format!("Script step {index} failed"))?;
    }

    Ok(exported)
}

fn apply_step(
    surface: &mut DrawingSurface,
    step: &ScriptStep,
    export: &ExportSettings,
    exported: &mut Vec<PathBuf>,
) -> Result<()> {
    match step {
        ScriptStep::Tool { tool } => {
            let tool: Tool = tool.parse().map_err(|e: String| anyhow!(e))?;
            surface.set_tool(tool);
        }
        ScriptStep::Color { color } => {
            let color = color
                .parse()
                .ok_or_else(|| anyhow!("unknown color {color:?}"))?;
            surface.set_color(color);
        }
        ScriptStep::Width { width } => surface.set_thickness(*width),
        ScriptStep::Press { x, y, button } => surface.on_mouse_press(*button, *x, *y),
        ScriptStep::Move { x, y } => surface.on_mouse_motion(*x, *y),
        ScriptStep::Release { x, y, button } => surface.on_mouse_release(*button, *x, *y),
        ScriptStep::Leave => surface.on_mouse_leave(),
        ScriptStep::ContextMenu { x, y } => surface.on_context_menu(*x, *y),
        ScriptStep::Modifiers { shift, ctrl, alt } => {
            surface.modifiers = Modifiers {
                shift: *shift,
                ctrl: *ctrl,
                alt: *alt,
            };
        }
        ScriptStep::Undo => {
            surface.undo();
        }
        ScriptStep::Redo => {
            surface.redo();
        }
        ScriptStep::DeleteSelected => {
            surface.delete_selected();
        }
        ScriptStep::Clear => {
            surface.clear();
        }
        ScriptStep::Export { path } => {
            let written = match path {
                Some(path) => surface.export_png_to(path)?,
                None => surface.export_png(export)?,
            };
            exported.push(written);
        }
    }
    Ok(())
}
