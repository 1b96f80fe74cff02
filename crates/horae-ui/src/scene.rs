use horae_engine::coords::{Rect, Vec2};
use horae_engine::scene::DrawList;
use horae_engine::text::{FontId, FontLoadError, FontSystem};
use horae_engine::time::WallTime;

use crate::painter::Painter;
use crate::widget::Widget;

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` and the `DrawList` that [`frame`](Self::frame)
/// repopulates each frame. Both are public so the caller can split-borrow
/// them when handing the list and the fonts to the engine's renderer.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let font = ui.load_font(&bytes)?;
/// let clock = Clock::new(font);
///
/// // In your on_frame callback:
/// ui.frame(&clock, viewport, wall, scale);
/// renderer.render(&mut canvas, &mut ui.draw_list, &ui.font_system);
/// ```
pub struct UiScene {
    pub font_system: FontSystem,
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            draw_list: DrawList::new(),
        }
    }

    /// Loads a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Clears the previous frame's commands and paints `root` across the
    /// viewport. The recorded commands are left in [`UiScene::draw_list`].
    pub fn frame(&mut self, root: &dyn Widget, viewport: Vec2, wall: WallTime, scale: f32) {
        self.draw_list.clear();
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        let mut painter = Painter::new(&mut self.draw_list, &self.font_system, wall, scale);
        root.paint(&mut painter, rect);
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
