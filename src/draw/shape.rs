//! Parametric shape definitions, construction rules and hit-testing.

use super::color::Color;
use crate::util::{self, Rect};
use std::fmt;
use std::str::FromStr;

/// Tag identifying which primitive a [`Shape`] is.
///
/// The tag of a committed shape never changes; only its geometry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Square,
    Circle,
    Triangle,
    Polygon,
    Arc,
}

impl ShapeKind {
    /// Every kind, in toolbar order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Polygon,
        ShapeKind::Arc,
    ];

    /// Lowercase name used in config files and scripts.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Arc => "arc",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| format!("unknown shape kind '{s}'"))
    }
}

/// Construction and hit-testing parameters shared by all shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDefaults {
    /// Vertex count for new polygons
    pub polygon_sides: u32,
    /// Radius used when a drag has zero length
    pub default_radius: f64,
    /// Extra slack (pixels) granted to line and circle hit-tests
    pub hit_tolerance: f64,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            polygon_sides: 5,
            default_radius: 50.0,
            hit_tolerance: 5.0,
        }
    }
}

/// A parametric drawing primitive.
///
/// Each variant carries its own stroke color and width, so shapes always
/// render with the style they were created with regardless of the current tool.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Straight segment from `(x1, y1)` to `(x2, y2)`
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        thick: f64,
    },
    /// Axis-aligned rectangle spanned by two corners (any order)
    Rectangle {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        thick: f64,
    },
    /// Rectangle whose corners are kept at equal |dx| and |dy|
    Square {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        thick: f64,
    },
    /// Full circle
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
        thick: f64,
    },
    /// Isosceles-ish triangle: base `(x1, y1)-(x2, y2)`, apex above the anchor
    Triangle {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        thick: f64,
    },
    /// Regular polygon centered on `(cx, cy)`
    Polygon {
        cx: f64,
        cy: f64,
        radius: f64,
        sides: u32,
        color: Color,
        thick: f64,
    },
    /// Half circle covering the side of the center with smaller y (screen "up")
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
        thick: f64,
    },
}

impl Shape {
    /// Builds a shape of `kind` from a drag that started at `anchor` and ended at `release`.
    pub fn from_drag(
        kind: ShapeKind,
        anchor: (f64, f64),
        release: (f64, f64),
        color: Color,
        thick: f64,
        defaults: &ShapeDefaults,
    ) -> Self {
        let (x1, y1) = anchor;
        let (x2, y2) = release;
        let (dx, dy) = (x2 - x1, y2 - y1);

        match kind {
            ShapeKind::Line => Shape::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                thick,
            },
            ShapeKind::Rectangle => Shape::Rectangle {
                x1,
                y1,
                x2,
                y2,
                color,
                thick,
            },
            ShapeKind::Square => {
                let (x2, y2) = square_corner(x1, y1, dx, dy);
                Shape::Square {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    thick,
                }
            }
            ShapeKind::Circle => {
                let (cx, cy) = util::midpoint(anchor, release);
                Shape::Circle {
                    cx,
                    cy,
                    radius: util::half_length_or(dx, dy, defaults.default_radius),
                    color,
                    thick,
                }
            }
            ShapeKind::Arc => {
                let (cx, cy) = util::midpoint(anchor, release);
                Shape::Arc {
                    cx,
                    cy,
                    radius: util::half_length_or(dx, dy, defaults.default_radius),
                    color,
                    thick,
                }
            }
            ShapeKind::Triangle => Shape::Triangle {
                x1,
                y1,
                x2,
                y2,
                color,
                thick,
            },
            ShapeKind::Polygon => Shape::Polygon {
                cx: x1,
                cy: y1,
                radius: util::half_length_or(dx, dy, defaults.default_radius),
                sides: defaults.polygon_sides,
                color,
                thick,
            },
        }
    }

    /// Returns the tag of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Polygon { .. } => ShapeKind::Polygon,
            Shape::Arc { .. } => ShapeKind::Arc,
        }
    }

    /// Stroke color stored with the shape.
    pub fn color(&self) -> Color {
        match self {
            Shape::Line { color, .. }
            | Shape::Rectangle { color, .. }
            | Shape::Square { color, .. }
            | Shape::Circle { color, .. }
            | Shape::Triangle { color, .. }
            | Shape::Polygon { color, .. }
            | Shape::Arc { color, .. } => *color,
        }
    }

    /// Stroke width stored with the shape.
    pub fn thick(&self) -> f64 {
        match self {
            Shape::Line { thick, .. }
            | Shape::Rectangle { thick, .. }
            | Shape::Square { thick, .. }
            | Shape::Circle { thick, .. }
            | Shape::Triangle { thick, .. }
            | Shape::Polygon { thick, .. }
            | Shape::Arc { thick, .. } => *thick,
        }
    }

    /// Translates every coordinate field by `(dx, dy)`. Size and radius are untouched.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Line { x1, y1, x2, y2, .. }
            | Shape::Rectangle { x1, y1, x2, y2, .. }
            | Shape::Square { x1, y1, x2, y2, .. }
            | Shape::Triangle { x1, y1, x2, y2, .. } => {
                *x1 += dx;
                *y1 += dy;
                *x2 += dx;
                *y2 += dy;
            }
            Shape::Circle { cx, cy, .. }
            | Shape::Arc { cx, cy, .. }
            | Shape::Polygon { cx, cy, .. } => {
                *cx += dx;
                *cy += dy;
            }
        }
    }

    /// Recomputes the extent from a drag vector measured from the gesture origin.
    ///
    /// Two-point shapes keep `(x1, y1)` and move the second point to
    /// `(x1 + dx, y1 + dy)`; squares keep equal sides. Round shapes and polygons
    /// keep their center and take half the drag length as radius.
    pub fn resize(&mut self, dx: f64, dy: f64, defaults: &ShapeDefaults) {
        match self {
            Shape::Line { x1, y1, x2, y2, .. }
            | Shape::Rectangle { x1, y1, x2, y2, .. }
            | Shape::Triangle { x1, y1, x2, y2, .. } => {
                *x2 = *x1 + dx;
                *y2 = *y1 + dy;
            }
            Shape::Square { x1, y1, x2, y2, .. } => {
                (*x2, *y2) = square_corner(*x1, *y1, dx, dy);
            }
            Shape::Circle { radius, .. }
            | Shape::Arc { radius, .. }
            | Shape::Polygon { radius, .. } => {
                *radius = util::half_length_or(dx, dy, defaults.default_radius);
            }
        }
    }

    /// Corner points of triangles and polygons, in drawing order.
    ///
    /// Returns an empty vector for shapes that are not vertex-based.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        match self {
            Shape::Triangle { x1, y1, x2, y2, .. } => {
                vec![(*x1, *y1), (*x2, *y2), triangle_apex(*x1, *y1, *x2, *y2)]
            }
            Shape::Polygon {
                cx,
                cy,
                radius,
                sides,
                ..
            } => util::regular_polygon_vertices(*cx, *cy, *radius, *sides),
            _ => Vec::new(),
        }
    }

    /// Returns the axis-aligned geometric extent of the shape (stroke width excluded).
    pub fn bounding_box(&self) -> Rect {
        match self {
            Shape::Line { x1, y1, x2, y2, .. }
            | Shape::Rectangle { x1, y1, x2, y2, .. }
            | Shape::Square { x1, y1, x2, y2, .. } => Rect::from_corners(*x1, *y1, *x2, *y2),
            Shape::Circle { cx, cy, radius, .. } => {
                Rect::from_corners(cx - radius, cy - radius, cx + radius, cy + radius)
            }
            Shape::Arc { cx, cy, radius, .. } => {
                Rect::from_corners(cx - radius, cy - radius, cx + radius, *cy)
            }
            Shape::Triangle { .. } | Shape::Polygon { .. } => {
                let vertices = self.vertices();
                Rect::covering(&vertices).unwrap_or(Rect::from_corners(0.0, 0.0, 0.0, 0.0))
            }
        }
    }

    /// Returns true when `(x, y)` selects this shape.
    ///
    /// Lines accept points within `thick + tolerance` of the segment, circles and
    /// arcs within `radius + tolerance` of the center (arcs only on the drawn half),
    /// rectangles and squares anywhere inside their box, triangles and polygons
    /// anywhere inside their outline.
    pub fn contains(&self, x: f64, y: f64, tolerance: f64) -> bool {
        match self {
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                thick,
                ..
            } => util::distance_to_segment(x, y, *x1, *y1, *x2, *y2) <= thick + tolerance,
            Shape::Rectangle { x1, y1, x2, y2, .. } | Shape::Square { x1, y1, x2, y2, .. } => {
                Rect::from_corners(*x1, *y1, *x2, *y2).contains(x, y)
            }
            Shape::Circle { cx, cy, radius, .. } => (x - cx).hypot(y - cy) <= radius + tolerance,
            Shape::Arc { cx, cy, radius, .. } => {
                (x - cx).hypot(y - cy) <= radius + tolerance && y <= *cy
            }
            Shape::Triangle { x1, y1, x2, y2, .. } => util::point_in_triangle(
                (x, y),
                (*x1, *y1),
                (*x2, *y2),
                triangle_apex(*x1, *y1, *x2, *y2),
            ),
            Shape::Polygon { .. } => util::point_in_polygon(x, y, &self.vertices()),
        }
    }
}

/// Apex of a triangle with base `(x1, y1)-(x2, y2)`: halfway across, `|dy|` above the anchor.
pub fn triangle_apex(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64) {
    (x1 + (x2 - x1) / 2.0, y1 - (y2 - y1).abs())
}

/// Second corner of a square anchored at `(x1, y1)` and dragged by `(dx, dy)`.
///
/// The side is `max(|dx|, |dy|)`, signed to follow the drag (non-positive deltas go negative).
fn square_corner(x1: f64, y1: f64, dx: f64, dy: f64) -> (f64, f64) {
    let size = dx.abs().max(dy.abs());
    let sx = if dx > 0.0 { size } else { -size };
    let sy = if dy > 0.0 { size } else { -size };
    (x1 + sx, y1 + sy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::WHITE;

    fn drag(kind: ShapeKind, anchor: (f64, f64), release: (f64, f64)) -> Shape {
        Shape::from_drag(kind, anchor, release, WHITE, 5.0, &ShapeDefaults::default())
    }

    #[test]
    fn every_kind_contains_the_middle_of_its_bounds() {
        for kind in ShapeKind::ALL {
            let shape = drag(kind, (10.0, 10.0), (100.0, 80.0));
            let (mx, my) = shape.bounding_box().center();
            assert!(
                shape.contains(mx, my, 5.0),
                "{kind} should contain ({mx}, {my})"
            );
            assert_eq!(shape.kind(), kind);
        }
    }

    #[test]
    fn reversed_boxes_still_hit() {
        for kind in [ShapeKind::Rectangle, ShapeKind::Square] {
            let shape = drag(kind, (100.0, 80.0), (10.0, 10.0));
            let (mx, my) = shape.bounding_box().center();
            assert!(shape.contains(mx, my, 5.0));
            assert!(!shape.contains(150.0, 150.0, 5.0));
        }
    }

    #[test]
    fn rectangle_keeps_drag_corners() {
        let shape = drag(ShapeKind::Rectangle, (10.0, 10.0), (100.0, 80.0));
        assert_eq!(
            shape,
            Shape::Rectangle {
                x1: 10.0,
                y1: 10.0,
                x2: 100.0,
                y2: 80.0,
                color: WHITE,
                thick: 5.0,
            }
        );
        assert!(shape.contains(50.0, 50.0, 5.0));
        assert!(!shape.contains(200.0, 200.0, 5.0));
    }

    #[test]
    fn square_follows_drag_direction() {
        let shape = drag(ShapeKind::Square, (50.0, 50.0), (20.0, 90.0));
        let Shape::Square { x2, y2, .. } = shape else {
            panic!("expected square");
        };
        assert_eq!((x2, y2), (10.0, 90.0));
    }

    #[test]
    fn circle_is_centered_between_drag_points() {
        let shape = drag(ShapeKind::Circle, (0.0, 0.0), (60.0, 80.0));
        let Shape::Circle { cx, cy, radius, .. } = shape else {
            panic!("expected circle");
        };
        assert_eq!((cx, cy, radius), (30.0, 40.0, 50.0));
        assert!(shape.contains(30.0 + 54.0, 40.0, 5.0));
        assert!(!shape.contains(30.0 + 56.0, 40.0, 5.0));
    }

    #[test]
    fn zero_length_drag_uses_default_radius() {
        for kind in [ShapeKind::Circle, ShapeKind::Arc, ShapeKind::Polygon] {
            let shape = drag(kind, (40.0, 40.0), (40.0, 40.0));
            let rect = shape.bounding_box();
            assert!(rect.width > 90.0, "{kind} collapsed to {rect:?}");
        }
    }

    #[test]
    fn arc_only_hits_its_upper_half() {
        let shape = drag(ShapeKind::Arc, (0.0, 100.0), (100.0, 100.0));
        assert!(shape.contains(50.0, 80.0, 5.0));
        assert!(!shape.contains(50.0, 120.0, 5.0));
    }

    #[test]
    fn line_tolerance_scales_with_stroke_width() {
        let shape = drag(ShapeKind::Line, (0.0, 0.0), (100.0, 0.0));
        assert!(shape.contains(50.0, 10.0, 5.0));
        assert!(!shape.contains(50.0, 10.5, 5.0));
    }

    #[test]
    fn polygon_uses_anchor_as_center() {
        let shape = drag(ShapeKind::Polygon, (200.0, 200.0), (260.0, 280.0));
        let Shape::Polygon {
            cx,
            cy,
            radius,
            sides,
            ..
        } = shape
        else {
            panic!("expected polygon");
        };
        assert_eq!((cx, cy, radius, sides), (200.0, 200.0, 50.0, 5));
        assert!(shape.contains(200.0, 200.0, 5.0));
        assert!(!shape.contains(260.0, 280.0, 5.0));
    }

    #[test]
    fn triangle_apex_sits_above_anchor() {
        let shape = drag(ShapeKind::Triangle, (10.0, 10.0), (100.0, 80.0));
        assert_eq!(shape.vertices()[2], (55.0, -60.0));
        assert!(shape.contains(55.0, 0.0, 5.0));
        assert!(!shape.contains(95.0, -50.0, 5.0));
    }

    #[test]
    fn translate_moves_all_points_without_resizing() {
        let mut shape = drag(ShapeKind::Line, (0.0, 0.0), (10.0, 10.0));
        shape.translate(5.0, -5.0);
        assert_eq!(shape.bounding_box(), Rect::from_corners(5.0, -5.0, 15.0, 5.0));

        let mut circle = drag(ShapeKind::Circle, (0.0, 0.0), (20.0, 0.0));
        circle.translate(10.0, 10.0);
        let Shape::Circle { cx, cy, radius, .. } = circle else {
            panic!("expected circle");
        };
        assert_eq!((cx, cy, radius), (20.0, 10.0, 10.0));
    }

    #[test]
    fn resize_with_zero_delta_defaults_circle_radius() {
        let mut circle = drag(ShapeKind::Circle, (0.0, 0.0), (20.0, 0.0));
        circle.resize(0.0, 0.0, &ShapeDefaults::default());
        let Shape::Circle { radius, .. } = circle else {
            panic!("expected circle");
        };
        assert_eq!(radius, 50.0);
    }

    #[test]
    fn resize_moves_second_corner_relative_to_first() {
        let mut rect = drag(ShapeKind::Rectangle, (10.0, 10.0), (100.0, 80.0));
        rect.resize(30.0, -20.0, &ShapeDefaults::default());
        assert_eq!(rect.bounding_box(), Rect::from_corners(10.0, 10.0, 40.0, -10.0));

        let mut square = drag(ShapeKind::Square, (0.0, 0.0), (10.0, 10.0));
        square.resize(30.0, 5.0, &ShapeDefaults::default());
        assert_eq!(square.bounding_box(), Rect::from_corners(0.0, 0.0, 30.0, 30.0));
    }

    #[test]
    fn kind_names_parse_back() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>(), Ok(kind));
        }
        assert!("hexagon".parse::<ShapeKind>().is_err());
    }
}
