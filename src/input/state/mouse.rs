use crate::draw::Shape;
use crate::input::{events::MouseButton, tool::Tool};
use log::debug;

use super::{DrawingSurface, GestureState, TransformIntent};

impl DrawingSurface {
    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left press on a shape (topmost wins): starts transforming it
    /// - Left press elsewhere with pencil/eraser: starts a freehand stroke
    /// - Left press elsewhere with a shape tool: starts creating that shape
    /// - Right press: context menu, deletes the shape under the pointer
    ///
    /// Presses while another gesture is active are ignored.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        match button {
            MouseButton::Left => {
                if !matches!(self.state, GestureState::Idle) {
                    debug!("Ignoring press at ({x:.1}, {y:.1}) during {:?}", self.state);
                    return;
                }

                if let Some(index) = self.hit_test(x, y) {
                    let intent = if self.modifiers.alt {
                        TransformIntent::Modify
                    } else {
                        TransformIntent::Select
                    };
                    debug!("Selected shape {index} ({}) via {intent:?}", self.shapes[index].kind());
                    self.state = GestureState::Transforming {
                        index,
                        origin: (x, y),
                        anchor: (x, y),
                        intent,
                    };
                } else if self.tool.is_freehand() {
                    // The last history entry already holds the pre-stroke ink.
                    self.state = GestureState::Freehand {
                        erasing: self.tool == Tool::Eraser,
                        last: (x, y),
                    };
                } else if let Tool::Shape(kind) = self.tool {
                    self.state = GestureState::Creating {
                        kind,
                        anchor: (x, y),
                        current: (x, y),
                    };
                }
            }
            MouseButton::Right => self.on_context_menu(x, y),
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion (dragging) events.
    ///
    /// # Behavior
    /// - Freehand: strokes a segment from the previous point into the ink layer
    /// - Creating: redraws the board with a preview of the shape
    /// - Transforming: moves the shape by the step delta, or with Shift held
    ///   resizes it from the press point
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        match &mut self.state {
            GestureState::Idle => return,
            GestureState::Freehand { erasing, last } => {
                let color = if *erasing { self.background } else { self.color };
                self.ink.stroke_segment(*last, (x, y), color, self.thickness);
                *last = (x, y);
            }
            GestureState::Creating { current, .. } => {
                *current = (x, y);
            }
            GestureState::Transforming {
                index,
                origin,
                anchor,
                ..
            } => {
                let Some(shape) = self.shapes.get_mut(*index) else {
                    self.state = GestureState::Idle;
                    return;
                };
                if self.modifiers.resizing() {
                    shape.resize(x - origin.0, y - origin.1, &self.shape_defaults);
                } else {
                    shape.translate(x - anchor.0, y - anchor.1);
                }
                *anchor = (x, y);
            }
        }
        self.redraw();
    }

    /// Processes mouse button release events.
    ///
    /// A left release commits the active gesture at `(x, y)`.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }
        self.finish_gesture(Some((x, y)));
    }

    /// Pointer left the canvas: commits the active gesture as if released
    /// at the last known pointer position.
    pub fn on_mouse_leave(&mut self) {
        self.finish_gesture(None);
    }

    /// Context menu request: deletes the selected shape, or the topmost shape
    /// under `(x, y)` when no transform is active.
    pub fn on_context_menu(&mut self, x: f64, y: f64) {
        match self.state {
            GestureState::Transforming { .. } => {
                self.delete_selected();
            }
            GestureState::Idle => {
                if let Some(index) = self.hit_test(x, y) {
                    self.remove_shape(index);
                }
            }
            _ => debug!("Context menu ignored during {:?}", self.state),
        }
    }

    fn finish_gesture(&mut self, release: Option<(f64, f64)>) {
        let state = std::mem::replace(&mut self.state, GestureState::Idle);

        match state {
            GestureState::Idle => return,
            GestureState::Freehand { .. } => match self.ink.snapshot() {
                Ok(snapshot) => self.history.push(snapshot),
                Err(err) => log::warn!("Failed to snapshot ink after stroke: {err}"),
            },
            GestureState::Creating {
                kind,
                anchor,
                current,
            } => {
                let shape = Shape::from_drag(
                    kind,
                    anchor,
                    release.unwrap_or(current),
                    self.color,
                    self.thickness,
                    &self.shape_defaults,
                );
                debug!("Committed {kind} #{}", self.shapes.len());
                self.shapes.push(shape);
            }
            GestureState::Transforming { index, .. } => {
                debug!("Finished transforming shape {index}");
            }
        }

        self.history.clear_redo();
        self.redraw();
    }
}
