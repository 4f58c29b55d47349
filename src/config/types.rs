//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Board dimensions and background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Board background color, also painted by the eraser
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the tool state the board starts with. Tool, color and width can
/// be changed at runtime; shape parameters apply to every new shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - a named color, `#rrggbb`, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Tool selected at startup: pencil, eraser, line, rectangle, square,
    /// circle, triangle, polygon or arc
    #[serde(default = "default_tool")]
    pub default_tool: String,

    /// Vertex count for new polygons (valid range: 3 - 12)
    #[serde(default = "default_polygon_sides")]
    pub polygon_sides: u32,

    /// Extra hit-test slack in pixels for lines and circles (valid range: 0.0 - 50.0)
    #[serde(default = "default_hit_tolerance")]
    pub hit_tolerance: f64,

    /// Radius used when a circle, arc or polygon drag has zero length
    #[serde(default = "default_radius")]
    pub default_radius: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            default_tool: default_tool(),
            polygon_sides: default_polygon_sides(),
            hit_tolerance: default_hit_tolerance(),
            default_radius: default_radius(),
        }
    }
}

/// Undo/redo settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum snapshots kept for undo, including the blank board (0 = unbounded)
    #[serde(default)]
    pub max_depth: usize,
}

/// PNG export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exports are written to (`~` is expanded)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Fixed export filename
    #[serde(default = "default_export_filename")]
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename: default_export_filename(),
        }
    }
}

/// Chat panel settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChatConfig {
    /// Author name for messages you send
    #[serde(default = "default_chat_user")]
    pub user: String,

    /// Author name of the simulated reply
    #[serde(default = "default_reply_user")]
    pub reply_user: String,

    /// Body of the simulated reply
    #[serde(default = "default_reply_text")]
    pub reply_text: String,

    /// Delay before the simulated reply, in milliseconds
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            user: default_chat_user(),
            reply_user: default_reply_user(),
            reply_text: default_reply_text(),
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

// Canvas defaults
fn default_width() -> i32 {
    900
}

fn default_height() -> i32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("#333333".to_string())
}

// Drawing defaults
fn default_color() -> ColorSpec {
    ColorSpec::Name("#ffffff".to_string())
}

fn default_thickness() -> f64 {
    5.0
}

fn default_tool() -> String {
    "pencil".to_string()
}

fn default_polygon_sides() -> u32 {
    5
}

fn default_hit_tolerance() -> f64 {
    5.0
}

fn default_radius() -> f64 {
    50.0
}

// Export defaults
fn default_export_directory() -> String {
    ".".to_string()
}

fn default_export_filename() -> String {
    crate::export::DEFAULT_FILENAME.to_string()
}

// Chat defaults
fn default_chat_user() -> String {
    "User1".to_string()
}

fn default_reply_user() -> String {
    "User2".to_string()
}

fn default_reply_text() -> String {
    "Thanks for your message!".to_string()
}

fn default_reply_delay_ms() -> u64 {
    2000
}
