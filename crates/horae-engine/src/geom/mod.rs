//! Closed-path geometry.
//!
//! Responsibilities:
//! - canvas-style path elements with elliptical arcs
//! - the rounded-rectangle family: rectangle, rounded rectangle, capsule,
//!   circle (with an ellipse fallback for degenerate inputs)
//! - by-value local transforms so shapes never mutate shared graphics state

mod path;
mod rounded;
mod transform;

pub use path::{Path, PathEl};
pub use rounded::rounded_rect;
pub use transform::Transform;
