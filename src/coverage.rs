//! Grid-sampled estimate of how much of a shape's interior is painted.
//!
//! Cost is proportional to `width * height / stride²`, so hosts should run
//! this when a stroke ends rather than on every pointer move.

#[cfg(test)]
#[path = "coverage_test.rs"]
mod coverage_test;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::DEFAULT_COVERAGE_STRIDE;
use crate::geometry::{self, Point};
use crate::raster::PaintSource;
use crate::shape::Shape;

/// Sampling density for [`compute_coverage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageConfig {
    stride: u32,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self { stride: DEFAULT_COVERAGE_STRIDE }
    }
}

impl CoverageConfig {
    /// Sample every `stride`th pixel on both axes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroStride`] for a stride of zero.
    pub fn new(stride: u32) -> Result<Self, ConfigError> {
        if stride == 0 {
            return Err(ConfigError::ZeroStride);
        }
        Ok(Self { stride })
    }

    #[must_use]
    pub fn stride(&self) -> u32 {
        self.stride
    }
}

/// Sample counts behind a coverage estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coverage {
    /// Grid samples that fell inside the shape.
    pub inside_samples: u32,
    /// Of those, how many were painted.
    pub painted_samples: u32,
}

impl Coverage {
    /// Whole-number percentage, rounded and capped at 100.
    ///
    /// A shape with no interior samples reports 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u8 {
        let pct = self.scaled_ratio(100.0).round().clamp(0.0, 100.0);
        pct as u8
    }

    /// Percentage with one decimal place, capped at 100.
    #[must_use]
    pub fn percent_tenths(&self) -> f64 {
        (self.scaled_ratio(1000.0).round() / 10.0).clamp(0.0, 100.0)
    }

    /// Count one interior sample. Counters saturate.
    fn tally(&mut self, painted: bool) {
        self.inside_samples = self.inside_samples.saturating_add(1);
        if painted {
            self.painted_samples = self.painted_samples.saturating_add(1);
        }
    }

    /// `scale * painted / max(1, inside)`, multiplied first.
    fn scaled_ratio(&self, scale: f64) -> f64 {
        scale * f64::from(self.painted_samples) / f64::from(self.inside_samples.max(1))
    }
}

/// Estimate painted coverage of `shape` by sampling `source` on a regular grid
/// over `[0, width) × [0, height)`.
#[must_use]
pub fn compute_coverage<S>(source: &S, shape: &Shape, config: &CoverageConfig) -> Coverage
where
    S: PaintSource + ?Sized,
{
    let step = config.stride as usize;
    let mut coverage = Coverage::default();
    for y in (0..source.height()).step_by(step) {
        for x in (0..source.width()).step_by(step) {
            let p = Point::new(f64::from(x), f64::from(y));
            if !geometry::point_in_shape(p, shape) {
                continue;
            }
            coverage.tally(source.is_painted(x, y));
        }
    }
    tracing::debug!(
        inside = coverage.inside_samples,
        painted = coverage.painted_samples,
        percent = coverage.percent(),
        "coverage estimated"
    );
    coverage
}
