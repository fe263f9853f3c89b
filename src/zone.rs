//! Inside / near / far classification of pointer samples.

#[cfg(test)]
#[path = "zone_test.rs"]
mod zone_test;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::{DEFAULT_NEAR_THRESHOLD_MM, DEFAULT_PIXELS_PER_MM};
use crate::geometry::{self, Point};
use crate::shape::Shape;

/// Where a sample landed relative to the target outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    /// Inside the shape (boundary inclusive for rect and circle).
    Inside,
    /// Outside, within the near threshold of the outline.
    OutsideNear,
    /// Outside, beyond the near threshold.
    OutsideFar,
}

impl Zone {
    /// Whether this is one of the two outside bands.
    #[must_use]
    pub fn is_outside(self) -> bool {
        !matches!(self, Self::Inside)
    }
}

/// Display density and band width used to turn pixel distances into zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneConfig {
    pixels_per_mm: f64,
    near_threshold_mm: f64,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            pixels_per_mm: DEFAULT_PIXELS_PER_MM,
            near_threshold_mm: DEFAULT_NEAR_THRESHOLD_MM,
        }
    }
}

impl ZoneConfig {
    /// Build a config for a given display density.
    ///
    /// # Errors
    ///
    /// `pixels_per_mm` must be finite and positive; `near_threshold_mm` must be
    /// finite and non-negative.
    pub fn new(pixels_per_mm: f64, near_threshold_mm: f64) -> Result<Self, ConfigError> {
        if !pixels_per_mm.is_finite() || pixels_per_mm <= 0.0 {
            return Err(ConfigError::PixelsPerMm(pixels_per_mm));
        }
        if !near_threshold_mm.is_finite() || near_threshold_mm < 0.0 {
            return Err(ConfigError::NearThreshold(near_threshold_mm));
        }
        Ok(Self { pixels_per_mm, near_threshold_mm })
    }

    #[must_use]
    pub fn pixels_per_mm(&self) -> f64 {
        self.pixels_per_mm
    }

    #[must_use]
    pub fn near_threshold_mm(&self) -> f64 {
        self.near_threshold_mm
    }

    /// Convert a canvas-pixel distance to millimetres.
    #[must_use]
    pub fn px_to_mm(&self, px: f64) -> f64 {
        px / self.pixels_per_mm
    }
}

/// Classify `p` against `shape`.
///
/// Inside points short-circuit; outline distance is only measured for
/// outside points. The near band is inclusive of its threshold.
#[must_use]
pub fn classify(p: Point, shape: &Shape, config: &ZoneConfig) -> Zone {
    if geometry::point_in_shape(p, shape) {
        return Zone::Inside;
    }
    let distance_mm = config.px_to_mm(geometry::distance_to_outline(p, shape));
    if distance_mm <= config.near_threshold_mm {
        Zone::OutsideNear
    } else {
        Zone::OutsideFar
    }
}
