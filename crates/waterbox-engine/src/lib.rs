//! Waterbox engine crate.
//!
//! Raster building blocks for the gauge: geometry, premultiplied colors,
//! face outlines, procedural pattern tiles and the compositor that layers
//! them into an off-screen frame. Everything runs synchronously on the
//! caller's thread and draws into `tiny_skia` pixmaps.

pub mod logging;
pub mod coords;
pub mod paint;
pub mod path;
pub mod pattern;
pub mod render;
