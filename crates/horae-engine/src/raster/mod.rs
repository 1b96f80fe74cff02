//! CPU rasterization of a recorded draw stream.
//!
//! Commands execute strictly in paint order into an RGBA8 framebuffer, so
//! later items cover earlier ones exactly as the scene layer's z/order
//! contract promises — punch-out effects depend on this.

mod canvas;

pub mod shapes;

pub use canvas::Canvas;

use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use shapes::path::PathScratch;

/// Executes draw lists on the CPU.
///
/// Owns scratch buffers reused across shapes and frames, so a warmed
/// renderer does not allocate per shape.
#[derive(Debug, Default)]
pub struct Renderer {
    path_scratch: PathScratch,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasters `draw_list` into `canvas` in paint order.
    pub fn render(
        &mut self,
        canvas: &mut Canvas<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Line(cmd) => shapes::line::draw(canvas, cmd),
                DrawCmd::Circle(cmd) => shapes::circle::draw(canvas, cmd),
                DrawCmd::Path(cmd) => shapes::path::draw(canvas, cmd, &mut self.path_scratch),
                DrawCmd::Text(cmd) => shapes::text::draw(canvas, cmd, fonts),
            }
        }
    }
}
