//! Paint model shared between the compositor and the gauge.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - CSS color string bridge
//! - palette adjustments (brighten, darken, alpha)
//!
//! Geometry types remain in `coords`.

mod adjust;
pub mod color;

pub use color::Color;
pub use waterbox_css::ParseError as ColorParseError;
