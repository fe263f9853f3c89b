//! Rescaling shapes when the canvas changes size.
//!
//! Catalog shapes are authored against a reference canvas; the host rescales
//! them whenever its layout changes. Scaling always returns a fresh [`Shape`]
//! so one catalog definition can be shared by any number of canvas sizes.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use crate::geometry::Point;
use crate::shape::{Circle, Polygon, Rect, Shape};

/// Scale `shape` by `scale_x` horizontally and `scale_y` vertically.
///
/// Circles keep their roundness: the radius uses the smaller of the two
/// factors. A negative factor mirrors the shape; rectangles are re-anchored so
/// their size stays non-negative.
///
/// Both factors must be finite; a NaN or infinite factor yields non-finite
/// coordinates that no validating constructor would accept. Debug builds
/// assert this. Factors from [`crate::layout::scale_factors`] are always finite.
#[must_use]
pub fn scale_shape(shape: &Shape, scale_x: f64, scale_y: f64) -> Shape {
    debug_assert!(
        scale_x.is_finite() && scale_y.is_finite(),
        "scale factors must be finite, got ({scale_x}, {scale_y})"
    );
    match shape {
        Shape::Rect(r) => Shape::Rect(scale_rect(r, scale_x, scale_y)),
        Shape::Circle(c) => Shape::Circle(Circle {
            center: Point::new(c.center.x * scale_x, c.center.y * scale_y),
            radius: c.radius * scale_x.abs().min(scale_y.abs()),
        }),
        Shape::Polygon(poly) => Shape::Polygon(Polygon {
            points: poly.points.iter().map(|p| Point::new(p.x * scale_x, p.y * scale_y)).collect(),
        }),
    }
}

fn scale_rect(r: &Rect, scale_x: f64, scale_y: f64) -> Rect {
    let (x, width) = scale_span(r.x, r.width, scale_x);
    let (y, height) = scale_span(r.y, r.height, scale_y);
    Rect { x, y, width, height }
}

/// Scale a 1-D `[start, start + len]` span, keeping `len` non-negative.
fn scale_span(start: f64, len: f64, factor: f64) -> (f64, f64) {
    let start = start * factor;
    let len = len * factor;
    if len < 0.0 { (start + len, -len) } else { (start, len) }
}

impl Shape {
    /// Method form of [`scale_shape`].
    #[must_use]
    pub fn scaled(&self, scale_x: f64, scale_y: f64) -> Shape {
        scale_shape(self, scale_x, scale_y)
    }
}
