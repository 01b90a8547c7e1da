use thiserror::Error;

use crate::pattern::PatternName;

/// Errors raised while setting up raster targets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The host surface did not yield a drawable raster context.
    #[error("surface has no drawable 2D raster context")]
    ContextUnavailable,

    /// An off-screen buffer could not be allocated (zero or oversized dimensions).
    #[error("cannot allocate a {width}x{height} raster buffer")]
    BufferAllocation { width: u32, height: u32 },

    /// A pattern tile could not be rasterized.
    #[error("cannot build a {width}x{height} `{name}` pattern tile")]
    PatternTile { name: PatternName, width: u32, height: u32 },
}
