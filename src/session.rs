//! Pointer-driven tracing session.
//!
//! `TraceSession` is the piece a host wires its pointer events into. It owns
//! the catalog shape, rescales it to the current canvas, classifies every
//! sample, threads the transition counters, and estimates coverage when a
//! stroke ends. It holds no rendering or timing state; the host stops feeding
//! events when its timer runs out.
//!
//! Samples must be fed in the order they happened.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::config::TraceConfig;
use crate::coverage::{self, Coverage};
use crate::geometry::Point;
use crate::layout::{self, CanvasSize};
use crate::raster::PaintSource;
use crate::scale::scale_shape;
use crate::shape::Shape;
use crate::tracker::ZoneTransitionState;
use crate::zone::{self, Zone};

/// Snapshot of session metrics, shaped for an external persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub near_count: u32,
    pub far_count: u32,
    pub outline_crossings: u32,
    /// Whole-number percentage from the most recent stroke end.
    pub coverage: u8,
    pub total_strokes: u32,
}

/// One exercise session against a single target shape.
#[derive(Debug, Clone)]
pub struct TraceSession {
    config: TraceConfig,
    /// Catalog definition in reference-canvas coordinates.
    base: Shape,
    /// `base` rescaled to `canvas`.
    shape: Shape,
    canvas: CanvasSize,
    tracker: ZoneTransitionState,
    drawing: bool,
    strokes: u32,
    coverage: Coverage,
}

impl TraceSession {
    /// Start a session for `base` (reference-canvas coordinates) on a canvas of `canvas`.
    #[must_use]
    pub fn new(base: Shape, canvas: CanvasSize, config: TraceConfig) -> Self {
        let shape = fit_shape(&base, canvas, &config);
        Self {
            config,
            base,
            shape,
            canvas,
            tracker: ZoneTransitionState::new(),
            drawing: false,
            strokes: 0,
            coverage: Coverage::default(),
        }
    }

    // --- Queries ---

    /// The target as drawn on the current canvas.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The target in reference-canvas coordinates.
    #[must_use]
    pub fn base_shape(&self) -> &Shape {
        &self.base
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    #[must_use]
    pub fn tracker(&self) -> ZoneTransitionState {
        self.tracker
    }

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Coverage from the most recent stroke end.
    #[must_use]
    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            near_count: self.tracker.near_count(),
            far_count: self.tracker.far_count(),
            outline_crossings: self.tracker.outline_crossings(),
            coverage: self.coverage.percent(),
            total_strokes: self.strokes,
        }
    }

    /// Classify a point against the current shape without recording it.
    #[must_use]
    pub fn classify(&self, p: Point) -> Zone {
        zone::classify(p, &self.shape, &self.config.zone)
    }

    // --- Pointer events ---

    /// Start a stroke at `p`.
    ///
    /// The previous stroke's last zone is forgotten; counters carry over.
    pub fn pointer_down(&mut self, p: Point) -> Zone {
        self.drawing = true;
        self.tracker = self.tracker.begin_stroke();
        self.record(p)
    }

    /// Continue the stroke at `p`. Returns `None` if no stroke is active.
    pub fn pointer_move(&mut self, p: Point) -> Option<Zone> {
        if !self.drawing {
            return None;
        }
        Some(self.record(p))
    }

    /// End the stroke and re-estimate coverage from `paint`.
    ///
    /// Returns `None` (and leaves coverage alone) if no stroke was active.
    pub fn pointer_up<S>(&mut self, paint: &S) -> Option<Coverage>
    where
        S: PaintSource + ?Sized,
    {
        if !self.drawing {
            return None;
        }
        self.drawing = false;
        self.strokes = self.strokes.saturating_add(1);
        self.coverage = coverage::compute_coverage(paint, &self.shape, &self.config.coverage);
        tracing::debug!(strokes = self.strokes, coverage = self.coverage.percent(), "stroke finished");
        Some(self.coverage)
    }

    fn record(&mut self, p: Point) -> Zone {
        let zone = self.classify(p);
        let before = self.tracker;
        self.tracker = self.tracker.record(zone);
        if before.last_zone() != Some(zone) {
            tracing::debug!(
                x = p.x,
                y = p.y,
                from = ?before.last_zone(),
                to = ?zone,
                near = self.tracker.near_count(),
                far = self.tracker.far_count(),
                crossings = self.tracker.outline_crossings(),
                "zone transition"
            );
        }
        zone
    }

    // --- Lifecycle ---

    /// Rescale the target for a new canvas size. Counters are kept.
    pub fn resize(&mut self, canvas: CanvasSize) {
        if canvas == self.canvas {
            return;
        }
        self.canvas = canvas;
        self.shape = fit_shape(&self.base, canvas, &self.config);
        tracing::debug!(width = canvas.width, height = canvas.height, "canvas resized");
    }

    /// Switch to a new target. Counters, strokes and coverage are reset.
    pub fn change_shape(&mut self, base: Shape) {
        tracing::info!(kind = base.kind(), "target shape changed");
        self.shape = fit_shape(&base, self.canvas, &self.config);
        self.base = base;
        self.reset();
    }

    /// Clear counters, strokes and coverage, and end any active stroke.
    pub fn reset(&mut self) {
        self.tracker = self.tracker.reset();
        self.drawing = false;
        self.strokes = 0;
        self.coverage = Coverage::default();
    }
}

fn fit_shape(base: &Shape, canvas: CanvasSize, config: &TraceConfig) -> Shape {
    let (sx, sy) = layout::scale_factors(canvas, &config.canvas);
    scale_shape(base, sx, sy)
}
