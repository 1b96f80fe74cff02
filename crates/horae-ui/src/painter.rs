use horae_engine::coords::Vec2;
use horae_engine::geom::{Path, Transform};
use horae_engine::paint::Color;
use horae_engine::scene::{DrawList, ZIndex};
use horae_engine::text::{FontId, FontSystem};
use horae_engine::time::WallTime;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API. Every call pushes at
/// a strictly increasing z, so shapes cover earlier shapes exactly in call
/// order — punch-out effects (the second-hand counterweight ring) rely on
/// this.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    font_system: &'a FontSystem,
    /// Physical-to-logical pixel ratio for this frame.
    pub scale: f32,
    /// Wall-clock reading for this frame.
    pub wall: WallTime,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(
        draw_list: &'a mut DrawList,
        font_system: &'a FontSystem,
        wall: WallTime,
        scale: f32,
    ) -> Self {
        Self {
            draw_list,
            font_system,
            scale,
            wall,
            z: 0,
        }
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measures `text` at the renderer's current physical scale.
    ///
    /// Prefer this over `font_system.measure_text` inside widget `paint`
    /// implementations: it lays out at `size × scale` and divides back, so
    /// the returned extents match where the rasterizer actually places
    /// glyphs.
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.font_system
            .measure_text_scaled(text, font, size, self.scale)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Stroked line segment.
    pub fn line(&mut self, p0: Vec2, p1: Vec2, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_line(z, p0, p1, width, color);
    }

    /// Solid circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, color);
    }

    /// Solid closed path, placed by the by-value local frame `transform`.
    pub fn fill_path(&mut self, path: Path, transform: Transform, color: Color) {
        let z = self.next_z();
        self.draw_list.push_path(z, path, transform, color);
    }

    /// Text with `origin` at the top-left of the run.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }

    /// Text centered, horizontally and vertically, on `center`.
    pub fn text_centered(
        &mut self,
        text: &str,
        font: FontId,
        size: f32,
        color: Color,
        center: Vec2,
    ) {
        let extent = self.measure_text(text, font, size);
        self.text(text, font, size, color, center - extent / 2.0);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
