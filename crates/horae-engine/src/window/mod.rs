//! Window runtime: winit event loop + framebuffer presentation.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
