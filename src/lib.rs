//! Geometry, zone-classification and coverage engine for the outline tracing
//! exercise.
//!
//! A user paints inside a target outline with a pointer. This crate decides,
//! for every pointer sample, whether it landed inside the target or how far
//! outside it strayed, counts how often the pointer entered each outside band,
//! and estimates how much of the target's interior has been painted once a
//! stroke ends. The host is responsible for rendering, timers and persisting
//! the resulting [`session::SessionStats`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, containment and point-to-outline distance |
//! | [`shape`] | Validated target shapes (rect, circle, polygon) |
//! | [`scale`] | Rescaling shapes to a new canvas size |
//! | [`zone`] | Inside / near / far classification |
//! | [`tracker`] | Edge-triggered zone transition counters |
//! | [`raster`] | Paint sources queried for "is this pixel painted" |
//! | [`coverage`] | Grid-sampled coverage estimation |
//! | [`layout`] | Canvas sizing relative to the reference canvas |
//! | [`catalog`] | Shape catalog parsing and selection |
//! | [`session`] | Pointer-driven session tying the pieces together |
//! | [`config`] | Aggregated tuning values, loadable from the environment |
//! | [`consts`] | Shared numeric defaults |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod coverage;
pub mod geometry;
pub mod layout;
pub mod raster;
pub mod scale;
pub mod session;
pub mod shape;
pub mod tracker;
pub mod zone;
