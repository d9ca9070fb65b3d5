#![deny(unsafe_code)]
//! CPU-side reference implementation of the driftfield `Renderer` seam.
//!
//! [`PixelCanvas`] accumulates frames into an RGB buffer with a motion-trail
//! fade; the `png` feature (default on) adds file snapshots. Pure pixel work
//! lives here so headless drivers and tests can share it without a windowing
//! stack.

pub mod canvas;
pub mod color;

#[cfg(feature = "png")]
pub mod snapshot;

pub use canvas::PixelCanvas;
