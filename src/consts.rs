//! Shared numeric constants for the shapetrace crate.

// ── Zones ───────────────────────────────────────────────────────

/// Screen pixels per millimetre at 96 DPI.
pub const DEFAULT_PIXELS_PER_MM: f64 = 3.78;

/// Outline distance, in millimetres, up to which an outside sample is "near".
pub const DEFAULT_NEAR_THRESHOLD_MM: f64 = 10.0;

// ── Coverage ────────────────────────────────────────────────────

/// Sample every Nth pixel on both axes when estimating coverage.
pub const DEFAULT_COVERAGE_STRIDE: u32 = 2;

/// Channel value above which a composited pixel counts as background white.
pub const WHITE_CHANNEL_THRESHOLD: u8 = 245;

// ── Canvas ──────────────────────────────────────────────────────

/// Width of the reference canvas that catalog shapes are authored against.
pub const REFERENCE_CANVAS_WIDTH: u32 = 700;

/// Height of the reference canvas that catalog shapes are authored against.
pub const REFERENCE_CANVAS_HEIGHT: u32 = 500;

/// Smallest canvas width the layout will shrink to.
pub const MIN_CANVAS_WIDTH: u32 = 300;

/// Horizontal padding subtracted from the container before fitting the canvas.
pub const CONTAINER_PADDING_PX: f64 = 32.0;
