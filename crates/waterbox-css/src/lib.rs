//! Lexer and parser for **CSS color strings**.
//!
//! Theme colors are written the way a stylesheet would write them
//! (`#88f`, `rgba(68, 188, 68, 0.6)`, `hsla(180, 30%, 60%, 1)`, …). This
//! crate turns such strings into straight-alpha RGBA bytes and has no
//! dependencies, so config tooling can validate colors without the engine.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `ParseError` |
//! | [`hsl`] | `hsl_to_rgb`, `rgb_to_hsl` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_color` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use waterbox_css::{parse_color, Rgba};
//!
//! assert_eq!(parse_color("#ff000080").unwrap(), Rgba::new(255, 0, 0, 128));
//! assert_eq!(parse_color("transparent").unwrap(), Rgba::TRANSPARENT);
//! ```

pub mod error;
pub mod hsl;
pub mod lexer;
mod named;
pub mod parser;

pub use error::ParseError;
pub use parser::parse_color;

/// Straight-alpha sRGB color bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}
