//! Target shapes: validated rectangles, circles and simple polygons.
//!
//! Every shape is checked once at construction (or deserialization) so the
//! geometry queries downstream can stay total. Shapes are immutable values;
//! rescaling produces a new shape (see [`crate::scale`]).
//!
//! The wire format is the flat, `type`-tagged object used by the shape
//! catalog, e.g. `{"type":"circle","cx":350,"cy":250,"r":120}`.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{self, Point};

/// Error returned when shape geometry is malformed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// A coordinate, dimension or radius was NaN or infinite.
    #[error("shape geometry must be finite")]
    NonFinite,
    /// A rectangle had a negative width or height.
    #[error("rect size must be non-negative (width {width}, height {height})")]
    NegativeSize { width: f64, height: f64 },
    /// A circle had a negative radius.
    #[error("circle radius must be non-negative (r {0})")]
    NegativeRadius(f64),
    /// A polygon had fewer than three vertices.
    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Rect {
    /// Build a rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if any value is non-finite or the size is negative.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ShapeError> {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(ShapeError::NonFinite);
        }
        if width < 0.0 || height < 0.0 {
            return Err(ShapeError::NegativeSize { width, height });
        }
        Ok(Self { x, y, width, height })
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub(crate) center: Point,
    pub(crate) radius: f64,
}

impl Circle {
    /// Build a circle.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if any value is non-finite or the radius is negative.
    pub fn new(cx: f64, cy: f64, r: f64) -> Result<Self, ShapeError> {
        if ![cx, cy, r].iter().all(|v| v.is_finite()) {
            return Err(ShapeError::NonFinite);
        }
        if r < 0.0 {
            return Err(ShapeError::NegativeRadius(r));
        }
        Ok(Self { center: Point::new(cx, cy), radius: r })
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Simple polygon, implicitly closed (the last vertex connects to the first).
///
/// The polygon may be non-convex; self-intersections are not rejected but
/// containment then follows the even-odd rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub(crate) points: Vec<Point>,
}

impl Polygon {
    /// Build a polygon from its vertices in order.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if there are fewer than three vertices or any
    /// coordinate is non-finite.
    pub fn new(points: Vec<Point>) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::TooFewPoints(points.len()));
        }
        if !points.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
            return Err(ShapeError::NonFinite);
        }
        Ok(Self { points })
    }

    /// Vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Closed edge list: `(points[i], points[i + 1])` with the last vertex
    /// wrapping back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

/// Axis-aligned bounding box of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }
}

/// A target region the user paints inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShapeRepr", into = "ShapeRepr")]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// Shorthand for `Shape::Rect(Rect::new(..)?)`.
    ///
    /// # Errors
    ///
    /// See [`Rect::new`].
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ShapeError> {
        Rect::new(x, y, width, height).map(Self::Rect)
    }

    /// Shorthand for `Shape::Circle(Circle::new(..)?)`.
    ///
    /// # Errors
    ///
    /// See [`Circle::new`].
    pub fn circle(cx: f64, cy: f64, r: f64) -> Result<Self, ShapeError> {
        Circle::new(cx, cy, r).map(Self::Circle)
    }

    /// Shorthand for `Shape::Polygon(Polygon::new(..)?)`.
    ///
    /// # Errors
    ///
    /// See [`Polygon::new`].
    pub fn polygon(points: Vec<Point>) -> Result<Self, ShapeError> {
        Polygon::new(points).map(Self::Polygon)
    }

    /// Catalog type tag: `"rect"`, `"circle"` or `"polygon"`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Circle(_) => "circle",
            Self::Polygon(_) => "polygon",
        }
    }

    /// Whether `p` lies inside the shape (boundary inclusive for rect and circle).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        geometry::point_in_shape(p, self)
    }

    /// Distance from `p` to the nearest point on the shape's outline.
    #[must_use]
    pub fn distance_to_outline(&self, p: Point) -> f64 {
        geometry::distance_to_outline(p, self)
    }

    /// Axis-aligned bounding box.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Rect(r) => Bounds {
                left: r.x,
                top: r.y,
                right: r.x + r.width,
                bottom: r.y + r.height,
            },
            Self::Circle(c) => Bounds {
                left: c.center.x - c.radius,
                top: c.center.y - c.radius,
                right: c.center.x + c.radius,
                bottom: c.center.y + c.radius,
            },
            Self::Polygon(poly) => poly.points.iter().fold(
                Bounds {
                    left: f64::INFINITY,
                    top: f64::INFINITY,
                    right: f64::NEG_INFINITY,
                    bottom: f64::NEG_INFINITY,
                },
                |b, p| Bounds {
                    left: b.left.min(p.x),
                    top: b.top.min(p.y),
                    right: b.right.max(p.x),
                    bottom: b.bottom.max(p.y),
                },
            ),
        }
    }
}

/// Flat serde representation, validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ShapeRepr {
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    Polygon { points: Vec<[f64; 2]> },
}

impl TryFrom<ShapeRepr> for Shape {
    type Error = ShapeError;

    fn try_from(repr: ShapeRepr) -> Result<Self, Self::Error> {
        match repr {
            ShapeRepr::Rect { x, y, width, height } => Self::rect(x, y, width, height),
            ShapeRepr::Circle { cx, cy, r } => Self::circle(cx, cy, r),
            ShapeRepr::Polygon { points } => Self::polygon(points.into_iter().map(|[x, y]| Point::new(x, y)).collect()),
        }
    }
}

impl From<Shape> for ShapeRepr {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Rect(r) => Self::Rect { x: r.x, y: r.y, width: r.width, height: r.height },
            Shape::Circle(c) => Self::Circle { cx: c.center.x, cy: c.center.y, r: c.radius },
            Shape::Polygon(poly) => Self::Polygon { points: poly.points.iter().map(|p| [p.x, p.y]).collect() },
        }
    }
}
