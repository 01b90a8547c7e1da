//! Coordinate and geometry types shared by the path builder and the gauge.
//!
//! Canonical space:
//! - Device pixels of the target surface
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are radians; a positive rotation turns +X towards +Y (clockwise on screen).

mod affine;
mod rect;
mod vec2;
mod viewport;

pub use affine::Affine;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
