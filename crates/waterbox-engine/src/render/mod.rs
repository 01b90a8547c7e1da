//! Raster compositing.
//!
//! - [`Compositor`] owns the frame and scratch buffers and paints fills,
//!   pattern overlays and edge batches into them.
//! - [`Surface`] is the host-owned target a finished frame is presented to.
//! - [`RendererConfig`] fixes the visual parameters that do not come from
//!   the theme.

mod compositor;
mod config;
mod error;
mod surface;

pub use compositor::Compositor;
pub use config::{PatternBlend, RendererConfig};
pub use error::RenderError;
pub use surface::{PixelBuffer, Surface};
