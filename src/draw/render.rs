//! Cairo-based rendering functions for shapes and the composed board.

use super::color::Color;
use super::shape::Shape;
use crate::util::Rect;
use std::f64::consts::PI;

/// Fills the whole surface with the board background.
///
/// Uses the `Source` operator so whatever was on the surface is replaced,
/// including any transparency.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    color.apply(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the previous frame
    let _ = ctx.restore();
}

/// Renders all shapes in creation order (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape using its own stored color and width.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    let _ = ctx.save();
    shape.color().apply(ctx);
    ctx.set_line_width(shape.thick());
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    match shape {
        Shape::Line { x1, y1, x2, y2, .. } => {
            ctx.move_to(*x1, *y1);
            ctx.line_to(*x2, *y2);
        }
        Shape::Rectangle { x1, y1, x2, y2, .. } | Shape::Square { x1, y1, x2, y2, .. } => {
            // Corners may come in any order; normalize before building the path
            let rect = Rect::from_corners(*x1, *y1, *x2, *y2);
            ctx.set_line_join(cairo::LineJoin::Miter);
            ctx.rectangle(rect.x, rect.y, rect.width, rect.height);
        }
        Shape::Circle { cx, cy, radius, .. } => {
            ctx.new_sub_path();
            ctx.arc(*cx, *cy, *radius, 0.0, 2.0 * PI);
        }
        Shape::Arc { cx, cy, radius, .. } => {
            // Counter-clockwise from 0 to -π sweeps through -π/2, the screen-up side
            ctx.new_sub_path();
            ctx.arc_negative(*cx, *cy, *radius, 0.0, -PI);
        }
        Shape::Triangle { .. } | Shape::Polygon { .. } => {
            trace_closed_path(ctx, &shape.vertices());
        }
    }

    let _ = ctx.stroke();
    let _ = ctx.restore();
}

fn trace_closed_path(ctx: &cairo::Context, vertices: &[(f64, f64)]) {
    let Some((&(x0, y0), rest)) = vertices.split_first() else {
        return;
    };
    ctx.move_to(x0, y0);
    for &(x, y) in rest {
        ctx.line_to(x, y);
    }
    ctx.close_path();
}

/// Strokes one freehand segment with round caps so consecutive segments join smoothly.
pub fn render_freehand_segment(
    ctx: &cairo::Context,
    from: (f64, f64),
    to: (f64, f64),
    color: Color,
    thick: f64,
) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(from.0, from.1);
    ctx.line_to(to.0, to.1);
    let _ = ctx.stroke();
}

/// Composes the visible board: background, then shapes, then the ink layer on top.
///
/// `preview` is drawn last, for a shape that is still being dragged out.
pub fn render_board(
    ctx: &cairo::Context,
    background: Color,
    shapes: &[Shape],
    ink: &cairo::ImageSurface,
    preview: Option<&Shape>,
) {
    render_background(ctx, background);
    render_shapes(ctx, shapes);

    match ctx.set_source_surface(ink, 0.0, 0.0) {
        Ok(()) => {
            let _ = ctx.paint();
        }
        Err(err) => log::warn!("Failed to composite ink layer: {err}"),
    }

    if let Some(shape) = preview {
        render_shape(ctx, shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BOARD_GRAY, RED, WHITE};
    use crate::draw::raster::{InkLayer, RasterSnapshot};
    use crate::draw::shape::{ShapeDefaults, ShapeKind};

    fn board(width: i32, height: i32) -> cairo::ImageSurface {
        cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap()
    }

    #[test]
    fn background_fills_every_pixel() {
        let surface = board(8, 8);
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            render_background(&ctx, BOARD_GRAY);
        }
        let snap = RasterSnapshot::capture(&surface).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(snap.pixel(x, y), Some([51, 51, 51, 255]));
            }
        }
    }

    #[test]
    fn shapes_render_in_their_own_color() {
        let surface = board(100, 100);
        let shape = Shape::from_drag(
            ShapeKind::Line,
            (0.0, 50.0),
            (100.0, 50.0),
            RED,
            6.0,
            &ShapeDefaults::default(),
        );
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            render_background(&ctx, BOARD_GRAY);
            render_shape(&ctx, &shape);
        }
        let snap = RasterSnapshot::capture(&surface).unwrap();
        assert_eq!(snap.pixel(50, 50), Some([255, 0, 0, 255]));
        assert_eq!(snap.pixel(50, 10), Some([51, 51, 51, 255]));
    }

    #[test]
    fn ink_is_composited_over_shapes() {
        let surface = board(100, 100);
        let ink = InkLayer::new(100, 100).unwrap();
        ink.stroke_segment((50.0, 0.0), (50.0, 100.0), WHITE, 6.0);
        let line = Shape::from_drag(
            ShapeKind::Line,
            (0.0, 50.0),
            (100.0, 50.0),
            RED,
            6.0,
            &ShapeDefaults::default(),
        );
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            render_board(&ctx, BOARD_GRAY, &[line], ink.surface(), None);
        }
        let snap = RasterSnapshot::capture(&surface).unwrap();
        assert_eq!(snap.pixel(50, 50), Some([255, 255, 255, 255]));
        assert_eq!(snap.pixel(20, 50), Some([255, 0, 0, 255]));
    }

    #[test]
    fn arc_is_drawn_on_the_upper_side() {
        let surface = board(100, 100);
        let arc = Shape::Arc {
            cx: 50.0,
            cy: 50.0,
            radius: 30.0,
            color: WHITE,
            thick: 4.0,
        };
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            render_background(&ctx, BOARD_GRAY);
            render_shape(&ctx, &arc);
        }
        let snap = RasterSnapshot::capture(&surface).unwrap();
        assert_eq!(snap.pixel(50, 20), Some([255, 255, 255, 255]));
        assert_eq!(snap.pixel(50, 80), Some([51, 51, 51, 255]));
    }
}
