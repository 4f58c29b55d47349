//! Utility functions for colors and 2D geometry.
//!
//! This module provides:
//! - Color name lookup for configuration files
//! - Point/segment/triangle/polygon predicates used by shape hit-testing
//! - Regular polygon vertex generation shared by rendering and hit-testing

use crate::draw::{Color, color::*};

/// Tolerance (in squared pixel units) for the triangle area-sum test.
pub const TRIANGLE_AREA_EPSILON: f64 = 0.01;

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "white", "black", "gray"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "gray" | "grey" => Some(BOARD_GRAY),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Builds a normalized rectangle from two opposite corners given in any order.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }

    /// Builds the smallest rectangle covering all points. Returns `None` for an empty slice.
    pub fn covering(points: &[(f64, f64)]) -> Option<Self> {
        let (&(fx, fy), rest) = points.split_first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (fx, fy, fx, fy);
        for &(x, y) in rest {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Some(Self::from_corners(min_x, min_y, max_x, max_y))
    }

    /// Returns the center of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive containment test.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Midpoint between two points.
pub fn midpoint(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    (a.0 + (b.0 - a.0) / 2.0, a.1 + (b.1 - a.1) / 2.0)
}

/// Half the length of `(dx, dy)`, or `default` when that length is zero.
///
/// This is the radius rule for circles, arcs and polygons built from a drag.
pub fn half_length_or(dx: f64, dy: f64, default: f64) -> f64 {
    let half = dx.hypot(dy) / 2.0;
    if half == 0.0 || !half.is_finite() {
        default
    } else {
        half
    }
}

/// Shortest distance from a point to the segment `(x1, y1)-(x2, y2)`.
///
/// Degenerate segments collapse to point distance.
pub fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let (cx, cy) = (x2 - x1, y2 - y1);
    let len_sq = cx * cx + cy * cy;

    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - x1) * cx + (py - y1) * cy) / len_sq).clamp(0.0, 1.0)
    };

    let nearest_x = x1 + t * cx;
    let nearest_y = y1 + t * cy;
    (px - nearest_x).hypot(py - nearest_y)
}

/// Unsigned area of the triangle `a, b, c`.
pub fn triangle_area(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    ((a.0 * (b.1 - c.1) + b.0 * (c.1 - a.1) + c.0 * (a.1 - b.1)) / 2.0).abs()
}

/// Area-sum containment test: `p` is inside when the three sub-triangles it
/// forms with each edge add up to the whole triangle.
pub fn point_in_triangle(p: (f64, f64), a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> bool {
    let total = triangle_area(a, b, c);
    let parts = triangle_area(a, b, p) + triangle_area(b, c, p) + triangle_area(c, a, p);
    (total - parts).abs() < TRIANGLE_AREA_EPSILON
}

/// Vertices of a regular polygon, vertex `i` at angle `2π·i/sides` from the center.
pub fn regular_polygon_vertices(cx: f64, cy: f64, radius: f64, sides: u32) -> Vec<(f64, f64)> {
    let step = std::f64::consts::TAU / sides.max(1) as f64;
    (0..sides)
        .map(|i| {
            let angle = step * i as f64;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// Even-odd ray casting point-in-polygon test.
pub fn point_in_polygon(px: f64, py: f64, vertices: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let Some(mut prev) = vertices.last().copied() else {
        return false;
    };

    for &(xi, yi) in vertices {
        let (xj, yj) = prev;
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        prev = (xi, yi);
    }

    inside
}
