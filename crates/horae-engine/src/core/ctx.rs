use crate::coords::Vec2;
use crate::raster::Canvas;
use crate::time::{FrameTime, WallTime};

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
pub struct FrameCtx<'a> {
    /// Framebuffer for this frame, already sized to the window.
    pub canvas: Canvas<'a>,

    /// Window size in logical pixels.
    pub viewport: Vec2,

    /// Physical-to-logical pixel ratio.
    pub scale: f32,

    /// Monotonic frame timing.
    pub time: FrameTime,

    /// Wall-clock reading taken at the start of the frame.
    pub wall: WallTime,
}
