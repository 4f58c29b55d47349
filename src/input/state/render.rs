use crate::draw::{Shape, render};

use super::{DrawingSurface, GestureState};

impl DrawingSurface {
    /// Builds the shape a creation gesture would commit if released now.
    pub(crate) fn provisional_shape(&self) -> Option<Shape> {
        if let GestureState::Creating {
            kind,
            anchor,
            current,
        } = &self.state
        {
            Some(Shape::from_drag(
                *kind,
                *anchor,
                *current,
                self.color,
                self.thickness,
                &self.shape_defaults,
            ))
        } else {
            None
        }
    }

    /// Recomposes the whole canvas: background, shapes, ink, then any preview.
    ///
    /// A Cairo failure leaves the previous frame in place.
    pub fn redraw(&mut self) {
        let preview = self.provisional_shape();
        match cairo::Context::new(&self.canvas) {
            Ok(ctx) => render::render_board(
                &ctx,
                self.background,
                &self.shapes,
                self.ink.surface(),
                preview.as_ref(),
            ),
            Err(err) => log::warn!("Failed to open canvas context: {err}"),
        }
    }
}
