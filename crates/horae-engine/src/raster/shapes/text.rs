use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::raster::Canvas;
use crate::scene::shapes::text::TextCmd;
use crate::text::FontSystem;

/// Blits glyph coverage for one text run.
///
/// Layout happens at physical scale so glyph positions agree with
/// `FontSystem::measure_text_scaled`. Commands whose font id resolves to no
/// loaded font are skipped; the rest of the frame is unaffected.
pub fn draw(canvas: &mut Canvas<'_>, cmd: &TextCmd, fonts: &FontSystem) {
    let Some(font) = fonts.get(cmd.font) else {
        return;
    };

    let scale = canvas.scale();
    let phys_size = cmd.size * scale;
    let origin = cmd.origin * scale;
    if !origin.is_finite() || phys_size <= 0.0 {
        return;
    }

    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &TextStyle::new(&cmd.text, phys_size, 0));

    for glyph in layout.glyphs() {
        if glyph.width == 0 {
            continue;
        }
        let (metrics, bitmap) = font.rasterize_config(glyph.key);
        let gx = (origin.x + glyph.x).round() as i32;
        let gy = (origin.y + glyph.y).round() as i32;

        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let coverage = bitmap[row * metrics.width + col] as f32 / 255.0;
                if coverage > 0.0 {
                    canvas.blend(gx + col as i32, gy + row as i32, cmd.color, coverage);
                }
            }
        }
    }
}
