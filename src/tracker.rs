//! Edge-triggered zone transition counting.
//!
//! The tracker counts how many times the pointer *entered* each outside band
//! and how many times it crossed the outline, not how many samples fell outside.
//! Repeated samples in the same zone are ignored, which keeps the counts
//! independent of the pointer's sampling rate.
//!
//! An outline crossing is any move across the outline within a stroke:
//! inside to either outside band, or either outside band back inside.
//!
//! State is a plain `Copy` value threaded through calls: every operation
//! returns the next state and leaves the input untouched.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use serde::{Deserialize, Serialize};

use crate::zone::Zone;

/// Transition counters for one drawing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneTransitionState {
    last_zone: Option<Zone>,
    outline_crossings: u32,
    near_count: u32,
    far_count: u32,
}

impl ZoneTransitionState {
    /// Fresh state: no last zone, all counters zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone of the previous sample in the current stroke, if any.
    #[must_use]
    pub fn last_zone(&self) -> Option<Zone> {
        self.last_zone
    }

    /// Number of times the pointer crossed the outline, in either direction.
    ///
    /// Re-entries count too: `[OutsideNear, Inside]` is one crossing and
    /// `[Inside, OutsideNear, Inside]` is two. Metrics recorded by counting
    /// only exits will read roughly half of this value.
    #[must_use]
    pub fn outline_crossings(&self) -> u32 {
        self.outline_crossings
    }

    /// Number of entries into the near band.
    #[must_use]
    pub fn near_count(&self) -> u32 {
        self.near_count
    }

    /// Number of entries into the far band.
    #[must_use]
    pub fn far_count(&self) -> u32 {
        self.far_count
    }

    /// Record a newly classified sample.
    #[must_use]
    pub fn record(self, zone: Zone) -> Self {
        if self.last_zone == Some(zone) {
            return self;
        }
        let mut next = self;
        match zone {
            Zone::OutsideNear => next.near_count = next.near_count.saturating_add(1),
            Zone::OutsideFar => next.far_count = next.far_count.saturating_add(1),
            Zone::Inside => {}
        }
        if self.last_zone.is_some_and(|last| last.is_outside() != zone.is_outside()) {
            next.outline_crossings = next.outline_crossings.saturating_add(1);
        }
        next.last_zone = Some(zone);
        next
    }

    /// Forget the last zone but keep the counters.
    ///
    /// Called when a new stroke starts, so a pointer lifted outside and put
    /// down outside again counts as a fresh entry.
    #[must_use]
    pub fn begin_stroke(self) -> Self {
        Self { last_zone: None, ..self }
    }

    /// Clear everything. Called at session start and on shape change.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }
}

/// Free-function form of [`ZoneTransitionState::record`].
#[must_use]
pub fn track_transition(state: ZoneTransitionState, zone: Zone) -> ZoneTransitionState {
    state.record(zone)
}
