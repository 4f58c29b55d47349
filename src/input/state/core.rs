//! Gesture state machine and drawing surface state.

use crate::draw::{
    Color, InkLayer, RasterSnapshot, Shape, ShapeDefaults, ShapeKind, SurfaceError,
    color::{BOARD_GRAY, WHITE},
};
use crate::history::History;
use crate::input::{modifiers::Modifiers, tool::Tool};

/// Smallest and largest stroke width accepted by the tool settings.
pub const THICKNESS_RANGE: (f64, f64) = (1.0, 20.0);

/// Why a transform gesture was started.
///
/// Both intents currently drive the same move/resize behavior; the distinction
/// is kept so the gesture log shows which modifier started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformIntent {
    /// Plain press on a shape
    Select,
    /// Press on a shape with Alt held
    Modify,
}

/// Current gesture state machine.
///
/// Exactly one gesture can be active. Every variant except `Idle` is left
/// through pointer-up, pointer-leave, or (for transforms) deletion.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureState {
    /// Not actively drawing - waiting for a pointer press
    Idle,
    /// Painting freehand ink (pencil or eraser)
    Freehand {
        /// Whether the stroke paints the background color
        erasing: bool,
        /// Last pointer position, start of the next segment
        last: (f64, f64),
    },
    /// Dragging out a new shape; nothing is committed until release
    Creating {
        /// Kind of shape being created
        kind: ShapeKind,
        /// Pointer position at press
        anchor: (f64, f64),
        /// Latest pointer position (preview end point)
        current: (f64, f64),
    },
    /// Moving or resizing an existing shape
    Transforming {
        /// Index of the selected shape in creation order
        index: usize,
        /// Pointer position at press (resize reference)
        origin: (f64, f64),
        /// Last pointer position (move reference, advanced every step)
        anchor: (f64, f64),
        /// Modifier that started the gesture
        intent: TransformIntent,
    },
}

/// Initial parameters for a [`DrawingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSettings {
    /// Canvas width in pixels
    pub width: i32,
    /// Canvas height in pixels
    pub height: i32,
    /// Board background, also the eraser color
    pub background: Color,
    /// Initial stroke color
    pub color: Color,
    /// Initial stroke width
    pub thickness: f64,
    /// Initial tool
    pub tool: Tool,
    /// Shape construction and hit-test parameters
    pub shape_defaults: ShapeDefaults,
    /// Maximum history entries (0 = unbounded)
    pub history_depth: usize,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            background: BOARD_GRAY,
            color: WHITE,
            thickness: 5.0,
            tool: Tool::Pencil,
            shape_defaults: ShapeDefaults::default(),
            history_depth: 0,
        }
    }
}

/// The whiteboard: composed canvas, ink layer, shapes, history and tool state.
///
/// All mutation happens through the pointer handlers (see `mouse.rs`) and the
/// actions (see `actions.rs`), each of which leaves the canvas redrawn.
pub struct DrawingSurface {
    /// Composed output: background, shapes, ink, preview
    pub(super) canvas: cairo::ImageSurface,
    /// Freehand pixel layer
    pub(super) ink: InkLayer,
    /// Undo/redo snapshots of `ink`
    pub(super) history: History,
    /// Committed shapes in creation order
    pub(super) shapes: Vec<Shape>,
    /// Current gesture
    pub(super) state: GestureState,
    /// Active tool for new gestures
    pub(super) tool: Tool,
    /// Stroke color for new gestures
    pub(super) color: Color,
    /// Stroke width for new gestures
    pub(super) thickness: f64,
    /// Board background color
    pub(super) background: Color,
    /// Shape construction and hit-test parameters
    pub(super) shape_defaults: ShapeDefaults,
    /// Current modifier key state
    pub modifiers: Modifiers,
}

impl DrawingSurface {
    /// Creates a blank board and seeds the history with its empty ink layer.
    pub fn new(settings: SurfaceSettings) -> Result<Self, SurfaceError> {
        let canvas =
            cairo::ImageSurface::create(cairo::Format::ARgb32, settings.width, settings.height)?;
        let ink = InkLayer::new(settings.width, settings.height)?;
        let history = History::new(ink.snapshot()?, settings.history_depth);

        let mut surface = Self {
            canvas,
            ink,
            history,
            shapes: Vec::new(),
            state: GestureState::Idle,
            tool: settings.tool,
            color: settings.color,
            thickness: clamp_thickness(settings.thickness),
            background: settings.background,
            shape_defaults: settings.shape_defaults,
            modifiers: Modifiers::new(),
        };
        surface.redraw();

        log::debug!(
            "Created {}x{} drawing surface (tool: {})",
            settings.width,
            settings.height,
            surface.tool
        );
        Ok(surface)
    }

    pub fn width(&self) -> i32 {
        self.canvas.width()
    }

    pub fn height(&self) -> i32 {
        self.canvas.height()
    }

    /// Committed shapes in creation order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Current gesture state.
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Index of the shape being transformed, if any.
    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            GestureState::Transforming { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Undo/redo history of the ink layer.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// The composed canvas surface (what export writes).
    pub fn canvas(&self) -> &cairo::ImageSurface {
        &self.canvas
    }

    /// Copies the composed canvas pixels.
    pub fn canvas_snapshot(&self) -> Result<RasterSnapshot, SurfaceError> {
        RasterSnapshot::capture(&self.canvas)
    }

    /// Copies the ink layer pixels.
    pub fn ink_snapshot(&self) -> Result<RasterSnapshot, SurfaceError> {
        self.ink.snapshot()
    }

    /// Selects the tool for future gestures. A gesture in progress keeps its own tool.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("Tool changed: {} -> {}", self.tool, tool);
            self.tool = tool;
        }
        self.redraw();
    }

    /// Sets the stroke color for future gestures; existing shapes keep theirs.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        log::debug!("Stroke color set to {}", color.to_hex());
        self.redraw();
    }

    /// Sets the stroke width for future gestures, clamped to [`THICKNESS_RANGE`].
    pub fn set_thickness(&mut self, thickness: f64) {
        self.thickness = clamp_thickness(thickness);
        log::debug!("Stroke width set to {:.1}", self.thickness);
        self.redraw();
    }

    /// Adjusts the stroke width by `delta`, clamping to [`THICKNESS_RANGE`].
    pub fn adjust_thickness(&mut self, delta: f64) {
        self.set_thickness(self.thickness + delta);
    }

    /// Index of the topmost shape under `(x, y)`; later shapes win.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let tolerance = self.shape_defaults.hit_tolerance;
        self.shapes
            .iter()
            .rposition(|shape| shape.contains(x, y, tolerance))
    }
}

fn clamp_thickness(thickness: f64) -> f64 {
    let (min, max) = THICKNESS_RANGE;
    if thickness.is_nan() {
        return min;
    }
    if !(min..=max).contains(&thickness) {
        log::warn!("Stroke width {thickness:.1} out of range, clamping to {min:.0}-{max:.0}");
    }
    thickness.clamp(min, max)
}
