//! Point containment and point-to-outline distance.
//!
//! All functions here are total over validated shapes: any finite or
//! non-finite point yields a result without panicking.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::shape::{Circle, Polygon, Rect, Shape};

/// A point in canvas space (CSS pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Whether `p` lies inside `shape`.
///
/// Rect and circle boundaries count as inside. Polygons use the even-odd
/// rule, so a point exactly on a polygon edge may land on either side.
#[must_use]
pub fn point_in_shape(p: Point, shape: &Shape) -> bool {
    match shape {
        Shape::Rect(r) => point_in_rect(p, r),
        Shape::Circle(c) => point_in_circle(p, c),
        Shape::Polygon(poly) => point_in_polygon(p, poly.points()),
    }
}

/// Distance from `p` to the nearest point on `shape`'s outline.
///
/// Rect distance is the clamped per-axis separation, so it is zero for any
/// point on or inside the rectangle. Circle and polygon distances measure to
/// the outline itself and are positive for interior points too.
#[must_use]
pub fn distance_to_outline(p: Point, shape: &Shape) -> f64 {
    match shape {
        Shape::Rect(r) => rect_distance(p, r),
        Shape::Circle(c) => (p.distance_to(c.center()) - c.radius()).abs(),
        Shape::Polygon(poly) => polygon_distance(p, poly),
    }
}

fn point_in_rect(p: Point, r: &Rect) -> bool {
    p.x >= r.x() && p.x <= r.x() + r.width() && p.y >= r.y() && p.y <= r.y() + r.height()
}

fn point_in_circle(p: Point, c: &Circle) -> bool {
    let dx = p.x - c.center().x;
    let dy = p.y - c.center().y;
    dx * dx + dy * dy <= c.radius() * c.radius()
}

/// Even-odd ray cast towards +x.
///
/// An edge counts as a crossing when its y-span straddles `p.y` (half-open,
/// so shared vertices are not counted twice) and its x-intercept lies to the
/// right of `p.x`. Horizontal edges never straddle and are skipped, which
/// keeps the intercept division well-defined.
#[must_use]
pub fn point_in_polygon(p: Point, points: &[Point]) -> bool {
    let Some(&last) = points.last() else {
        return false;
    };
    let mut inside = false;
    let mut prev = last;
    for &cur in points {
        if (cur.y > p.y) != (prev.y > p.y) {
            let x_intercept = (prev.x - cur.x) * (p.y - cur.y) / (prev.y - cur.y) + cur.x;
            if p.x < x_intercept {
                inside = !inside;
            }
        }
        prev = cur;
    }
    inside
}

/// Distance from `p` to the segment `a`-`b`.
///
/// The projection parameter is clamped to `[0, 1]`; a zero-length segment
/// collapses to the distance to `a`.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(Point::new(a.x + t * dx, a.y + t * dy))
}

fn rect_distance(p: Point, r: &Rect) -> f64 {
    let dx = (r.x() - p.x).max(p.x - (r.x() + r.width())).max(0.0);
    let dy = (r.y() - p.y).max(p.y - (r.y() + r.height())).max(0.0);
    dx.hypot(dy)
}

fn polygon_distance(p: Point, poly: &Polygon) -> f64 {
    poly.edges()
        .map(|(a, b)| distance_to_segment(p, a, b))
        .fold(f64::INFINITY, f64::min)
}
