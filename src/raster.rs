//! Paint sources: anything that can answer "is this pixel painted?".
//!
//! The coverage estimator only sees the [`PaintSource`] trait, so it works the
//! same over a composited canvas snapshot, a dedicated paint layer, or the
//! vector strokes recorded by the host.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use serde::{Deserialize, Serialize};

use crate::consts::WHITE_CHANNEL_THRESHOLD;
use crate::geometry::{self, Point};

/// Error returned for malformed pixel buffers and strokes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RasterError {
    /// `data.len()` was not `width * height * 4`.
    #[error("rgba buffer for {width}x{height} needs {expected} bytes, got {actual}")]
    SizeMismatch { width: u32, height: u32, expected: usize, actual: usize },
    #[error("brush size must be finite and positive, got {0}")]
    BrushSize(f64),
}

/// A raster the coverage estimator can sample.
pub trait PaintSource {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Whether the pixel at `(x, y)` counts as painted. Out-of-range pixels are not.
    fn is_painted(&self, x: u32, y: u32) -> bool;
}

/// How an RGBA buffer distinguishes paint from background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    /// Snapshot of the visible canvas drawn over a white background: a pixel
    /// is paint if it is not transparent and not near-white.
    #[default]
    Composited,
    /// Paint-only layer over a transparent background: any alpha is paint.
    PaintLayer,
}

impl PaintMode {
    /// Classify one RGBA pixel.
    #[must_use]
    pub fn is_paint(self, [r, g, b, a]: [u8; 4]) -> bool {
        if a == 0 {
            return false;
        }
        match self {
            Self::Composited => !(r > WHITE_CHANNEL_THRESHOLD && g > WHITE_CHANNEL_THRESHOLD && b > WHITE_CHANNEL_THRESHOLD),
            Self::PaintLayer => true,
        }
    }
}

/// Row-major RGBA8 pixel buffer.
#[derive(Debug, Clone)]
pub struct RgbaRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
    mode: PaintMode,
}

impl RgbaRaster {
    /// Wrap an existing buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::SizeMismatch`] if `data` is not exactly
    /// `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>, mode: PaintMode) -> Result<Self, RasterError> {
        let expected = byte_len(width, height);
        if data.len() != expected {
            return Err(RasterError::SizeMismatch { width, height, expected, actual: data.len() });
        }
        Ok(Self { width, height, data, mode })
    }

    /// Fresh, unpainted buffer: opaque white for [`PaintMode::Composited`],
    /// fully transparent for [`PaintMode::PaintLayer`].
    #[must_use]
    pub fn blank(width: u32, height: u32, mode: PaintMode) -> Self {
        let fill = match mode {
            PaintMode::Composited => 0xFF,
            PaintMode::PaintLayer => 0x00,
        };
        Self { width, height, data: vec![fill; byte_len(width, height)], mode }
    }

    #[must_use]
    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    /// RGBA value at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.offset(x, y)?;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrite the pixel at `(x, y)`. Returns false if it is out of range.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
        let Some(i) = self.offset(x, y) else {
            return false;
        };
        match self.data.get_mut(i..i + 4) {
            Some(px) => {
                px.copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

impl PaintSource for RgbaRaster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_painted(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y).is_some_and(|px| self.mode.is_paint(px))
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

/// One recorded brush stroke: a polyline swept by a round brush.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StrokeRepr")]
pub struct Stroke {
    /// Brush diameter in canvas pixels.
    brush_size: f64,
    /// Pointer positions in the order they were sampled.
    points: Vec<Point>,
}

impl Stroke {
    /// Start an empty stroke.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::BrushSize`] unless `brush_size` is finite and
    /// greater than zero.
    pub fn new(brush_size: f64) -> Result<Self, RasterError> {
        if !brush_size.is_finite() || brush_size <= 0.0 {
            return Err(RasterError::BrushSize(brush_size));
        }
        Ok(Self { brush_size, points: Vec::new() })
    }

    #[must_use]
    pub fn brush_size(&self) -> f64 {
        self.brush_size
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Append a pointer position.
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Whether `p` lies under the brush anywhere along the stroke.
    ///
    /// A single-point stroke paints a round dot.
    #[must_use]
    pub fn covers(&self, p: Point) -> bool {
        let reach = self.brush_size / 2.0;
        match self.points.as_slice() {
            [] => false,
            [only] => p.distance_to(*only) <= reach,
            pts => pts.windows(2).any(|w| geometry::distance_to_segment(p, w[0], w[1]) <= reach),
        }
    }
}

#[derive(Deserialize)]
struct StrokeRepr {
    brush_size: f64,
    points: Vec<Point>,
}

impl TryFrom<StrokeRepr> for Stroke {
    type Error = RasterError;

    fn try_from(repr: StrokeRepr) -> Result<Self, Self::Error> {
        let mut stroke = Self::new(repr.brush_size)?;
        stroke.points = repr.points;
        Ok(stroke)
    }
}

/// Vector paint source built from recorded strokes.
#[derive(Debug, Clone, Default)]
pub struct StrokeLayer {
    width: u32,
    height: u32,
    strokes: Vec<Stroke>,
}

impl StrokeLayer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, strokes: Vec::new() }
    }

    /// Add a finished stroke.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Drop all strokes, e.g. when the target shape changes.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

impl PaintSource for StrokeLayer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_painted(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let p = Point::new(f64::from(x), f64::from(y));
        self.strokes.iter().any(|s| s.covers(p))
    }
}
