//! Waterbox gauge crate.
//!
//! Renders a percentage as a translucent prism partly filled with water.
//!
//! - [`theme`]: colors, patterns and options, loadable from TOML
//! - [`layout`]: where the prism sits in the surface
//! - [`scene`]: the back-to-front list of faces for a value
//! - [`Renderer`]: owns the buffers and draws frames into a host surface
//!
//! ```no_run
//! use waterbox_gauge::{Renderer, Theme};
//!
//! let surface = tiny_skia::Pixmap::new(64, 96).unwrap();
//! let mut gauge = Renderer::new(surface).unwrap();
//! gauge.render(42.0, &Theme::default());
//! ```

pub mod layout;
pub mod scene;
pub mod theme;
mod renderer;

pub use renderer::Renderer;
pub use theme::Theme;
