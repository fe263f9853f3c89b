//! Tuning values for classification, coverage and canvas layout.
//!
//! Nothing here is global: hosts build a [`TraceConfig`] (directly or with
//! [`TraceConfig::from_env`]) and pass it into the session.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    DEFAULT_COVERAGE_STRIDE, DEFAULT_NEAR_THRESHOLD_MM, DEFAULT_PIXELS_PER_MM, MIN_CANVAS_WIDTH, REFERENCE_CANVAS_HEIGHT,
    REFERENCE_CANVAS_WIDTH,
};
use crate::coverage::CoverageConfig;
use crate::layout::CanvasConfig;
use crate::zone::ZoneConfig;

/// Error returned when a tuning value is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("pixels per mm must be finite and positive, got {0}")]
    PixelsPerMm(f64),
    #[error("near threshold must be finite and non-negative, got {0} mm")]
    NearThreshold(f64),
    #[error("coverage stride must be at least 1")]
    ZeroStride,
    #[error("reference canvas must be non-empty, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
}

/// Everything a [`crate::session::TraceSession`] needs to know about the display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TraceConfig {
    pub zone: ZoneConfig,
    pub coverage: CoverageConfig,
    pub canvas: CanvasConfig,
}

impl TraceConfig {
    /// Load from environment variables, falling back to defaults.
    ///
    /// - `SHAPETRACE_PIXELS_PER_MM` (default 3.78)
    /// - `SHAPETRACE_NEAR_THRESHOLD_MM` (default 10)
    /// - `SHAPETRACE_COVERAGE_STRIDE` (default 2)
    /// - `SHAPETRACE_CANVAS_WIDTH` / `SHAPETRACE_CANVAS_HEIGHT` (default 700x500)
    /// - `SHAPETRACE_CANVAS_MIN_WIDTH` (default 300)
    ///
    /// Unparsable values are treated as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a parsed value is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let zone = ZoneConfig::new(
            env_parse("SHAPETRACE_PIXELS_PER_MM", DEFAULT_PIXELS_PER_MM),
            env_parse("SHAPETRACE_NEAR_THRESHOLD_MM", DEFAULT_NEAR_THRESHOLD_MM),
        )?;
        let coverage = CoverageConfig::new(env_parse("SHAPETRACE_COVERAGE_STRIDE", DEFAULT_COVERAGE_STRIDE))?;
        let canvas = CanvasConfig::new(
            env_parse("SHAPETRACE_CANVAS_WIDTH", REFERENCE_CANVAS_WIDTH),
            env_parse("SHAPETRACE_CANVAS_HEIGHT", REFERENCE_CANVAS_HEIGHT),
            env_parse("SHAPETRACE_CANVAS_MIN_WIDTH", MIN_CANVAS_WIDTH),
        )?;
        tracing::debug!(
            pixels_per_mm = zone.pixels_per_mm(),
            near_threshold_mm = zone.near_threshold_mm(),
            stride = coverage.stride(),
            "trace config loaded"
        );
        Ok(Self { zone, coverage, canvas })
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(v) => v.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
