//! Geometric path builder for the prism faces.
//!
//! Every face is an axis-aligned local shape (a square, a unit rectangle or a
//! three-point chevron) mapped through an explicit [`Affine`](crate::coords::Affine).
//! Nothing here touches raster state, so each outline is a pure function of
//! its [`PathShape`].

mod outline;
mod shape;

pub use outline::Outline;
pub use shape::PathShape;
