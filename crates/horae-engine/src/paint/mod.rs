//! Paint model shared between the scene and the rasterizer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
