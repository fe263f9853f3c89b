//! Canvas sizing relative to the reference canvas shapes are authored on.
//!
//! The host measures its container, asks [`fit_canvas`] for a canvas size and
//! rescales the catalog shape by [`scale_factors`] whenever that size changes.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::{CONTAINER_PADDING_PX, MIN_CANVAS_WIDTH, REFERENCE_CANVAS_HEIGHT, REFERENCE_CANVAS_WIDTH};

/// Canvas dimensions in whole CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Reference canvas and shrink limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    reference: CanvasSize,
    min_width: u32,
    container_padding: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            reference: CanvasSize::new(REFERENCE_CANVAS_WIDTH, REFERENCE_CANVAS_HEIGHT),
            min_width: MIN_CANVAS_WIDTH,
            container_padding: CONTAINER_PADDING_PX,
        }
    }
}

impl CanvasConfig {
    /// Build a config for a reference canvas of `width` x `height`.
    ///
    /// `min_width` is clamped to the reference width.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCanvas`] if either reference dimension is zero.
    pub fn new(width: u32, height: u32, min_width: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyCanvas { width, height });
        }
        Ok(Self {
            reference: CanvasSize::new(width, height),
            min_width: min_width.min(width),
            container_padding: CONTAINER_PADDING_PX,
        })
    }

    /// The canvas size catalog shapes are authored against.
    #[must_use]
    pub fn reference(&self) -> CanvasSize {
        self.reference
    }

    #[must_use]
    pub fn min_width(&self) -> u32 {
        self.min_width
    }
}

/// Fit the canvas into a container `container_width` CSS pixels wide.
///
/// The canvas never exceeds the reference width, never shrinks below the
/// minimum width, and keeps the reference aspect ratio.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fit_canvas(container_width: f64, config: &CanvasConfig) -> CanvasSize {
    let reference = config.reference;
    let available = container_width - config.container_padding;
    // NaN falls through to the minimum.
    let width = if available >= f64::from(reference.width) {
        f64::from(reference.width)
    } else if available > f64::from(config.min_width) {
        available.round()
    } else {
        f64::from(config.min_width)
    };
    let aspect = f64::from(reference.height) / f64::from(reference.width);
    CanvasSize::new(width as u32, (width * aspect).round() as u32)
}

/// Per-axis factors that map reference-canvas coordinates onto `canvas`.
#[must_use]
pub fn scale_factors(canvas: CanvasSize, config: &CanvasConfig) -> (f64, f64) {
    let reference = config.reference;
    (
        f64::from(canvas.width) / f64::from(reference.width),
        f64::from(canvas.height) / f64::from(reference.height),
    )
}
