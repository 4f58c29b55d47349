//! Configuration file support for whiteboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/whiteboard/config.toml`. Settings include canvas size and
//! background, drawing defaults, history depth, export location and chat identities.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, ChatConfig, DrawingConfig, ExportConfig, HistoryConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::chat::ChatSettings;
use crate::draw::{
    ShapeDefaults,
    color::{BOARD_GRAY, WHITE},
};
use crate::export::{ExportSettings, expand_tilde};
use crate::input::{SurfaceSettings, Tool, state::THICKNESS_RANGE};

/// Largest accepted canvas edge in pixels.
const MAX_CANVAS_EDGE: i32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 900
/// height = 600
/// background = "#333333"
///
/// [drawing]
/// default_color = "red"
/// default_thickness = 3.0
/// default_tool = "rectangle"
///
/// [history]
/// max_depth = 50
///
/// [export]
/// directory = "~/Pictures"
///
/// [chat]
/// reply_delay_ms = 500
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing tool defaults (color, thickness, tool, shape parameters)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Undo/redo depth
    #[serde(default)]
    pub history: HistoryConfig,

    /// PNG export location
    #[serde(default)]
    pub export: ExportConfig,

    /// Chat panel identities and reply timing
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `default_thickness`: 1.0 - 20.0
    /// - `polygon_sides`: 3 - 12
    /// - `hit_tolerance`: 0.0 - 50.0
    /// - `default_radius`: greater than 0
    pub fn validate_and_clamp(&mut self) {
        // Canvas size: 1 - 8192
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 1-{MAX_CANVAS_EDGE} range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 1-{MAX_CANVAS_EDGE} range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }

        // Thickness: 1.0 - 20.0
        let (min_thick, max_thick) = THICKNESS_RANGE;
        if !(min_thick..=max_thick).contains(&self.drawing.default_thickness) {
            warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = if self.drawing.default_thickness.is_nan() {
                min_thick
            } else {
                self.drawing.default_thickness.clamp(min_thick, max_thick)
            };
        }

        // Polygon sides: 3 - 12
        if !(3..=12).contains(&self.drawing.polygon_sides) {
            warn!(
                "Invalid polygon_sides {}, clamping to 3-12 range",
                self.drawing.polygon_sides
            );
            self.drawing.polygon_sides = self.drawing.polygon_sides.clamp(3, 12);
        }

        // Hit tolerance: 0.0 - 50.0
        if !(0.0..=50.0).contains(&self.drawing.hit_tolerance) {
            warn!(
                "Invalid hit_tolerance {:.1}, clamping to 0.0-50.0 range",
                self.drawing.hit_tolerance
            );
            self.drawing.hit_tolerance = if self.drawing.hit_tolerance.is_nan() {
                0.0
            } else {
                self.drawing.hit_tolerance.clamp(0.0, 50.0)
            };
        }

        // Default radius must be positive
        if !self.drawing.default_radius.is_finite() || self.drawing.default_radius <= 0.0 {
            warn!(
                "Invalid default_radius {:.1}, falling back to 50.0",
                self.drawing.default_radius
            );
            self.drawing.default_radius = 50.0;
        }

        // Validate tool name
        if self.drawing.default_tool.parse::<Tool>().is_err() {
            warn!(
                "Invalid default_tool '{}', falling back to 'pencil'",
                self.drawing.default_tool
            );
            self.drawing.default_tool = "pencil".to_string();
        }

        // Validate colors
        if self.canvas.background.parse().is_none() {
            warn!(
                "Invalid canvas background {:?}, falling back to #333333",
                self.canvas.background
            );
            self.canvas.background = ColorSpec::Name(BOARD_GRAY.to_hex());
        }
        if self.drawing.default_color.parse().is_none() {
            warn!(
                "Invalid default_color {:?}, falling back to #ffffff",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name(WHITE.to_hex());
        }

        if self.export.filename.trim().is_empty() {
            warn!("Empty export filename, falling back to default");
            self.export.filename = crate::export::DEFAULT_FILENAME.to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/whiteboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("whiteboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Initial drawing surface parameters.
    pub fn surface_settings(&self) -> SurfaceSettings {
        SurfaceSettings {
            width: self.canvas.width,
            height: self.canvas.height,
            background: self.canvas.background.to_color_or(BOARD_GRAY),
            color: self.drawing.default_color.to_color_or(WHITE),
            thickness: self.drawing.default_thickness,
            tool: self.drawing.default_tool.parse().unwrap_or_default(),
            shape_defaults: ShapeDefaults {
                polygon_sides: self.drawing.polygon_sides,
                default_radius: self.drawing.default_radius,
                hit_tolerance: self.drawing.hit_tolerance,
            },
            history_depth: self.history.max_depth,
        }
    }

    /// Export destination with `~` expanded.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            directory: expand_tilde(&self.export.directory),
            filename: self.export.filename.clone(),
        }
    }

    /// Chat identities and reply timing.
    pub fn chat_settings(&self) -> ChatSettings {
        ChatSettings {
            user: self.chat.user.clone(),
            reply_user: self.chat.reply_user.clone(),
            reply_text: self.chat.reply_text.clone(),
            reply_delay: Duration::from_millis(self.chat.reply_delay_ms),
        }
    }

    /// JSON schema of the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
