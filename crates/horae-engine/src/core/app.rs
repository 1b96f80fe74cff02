use crate::coords::Vec2;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called when the window's logical size or pixel density changes.
    ///
    /// Size-derived caches (measured label extents) must be dropped here;
    /// the default does nothing.
    fn on_resize(&mut self, logical_size: Vec2) {
        let _ = logical_size;
    }

    /// Called once per presented frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
