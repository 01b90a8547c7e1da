//! Procedural pattern tiles and their per-slot cache.
//!
//! A [`PatternSpec`] names a texture, its cell size and its opacity. The
//! generators in [`generate`] rasterize a spec into a repeatable tile;
//! [`PatternCache`] keeps the last tile so unchanged specs are not rebuilt
//! every frame.

mod cache;
pub mod generate;
mod spec;

pub use cache::{PatternCache, PatternTile};
pub use spec::{PatternName, PatternSpec};
