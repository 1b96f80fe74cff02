use crate::coords::Vec2;
use crate::raster::Canvas;
use crate::scene::shapes::circle::CircleCmd;

/// Anti-aliased filled circle: radial distance per pixel center, feathered
/// over one pixel at the rim.
pub fn draw(canvas: &mut Canvas<'_>, cmd: &CircleCmd) {
    let scale = canvas.scale();
    let center = cmd.center * scale;
    let radius = cmd.radius * scale;
    if radius <= 0.0 || !center.is_finite() || !radius.is_finite() {
        return;
    }

    let pad = radius.ceil() as i32 + 1;
    let cx = center.x.round() as i32;
    let cy = center.y.round() as i32;

    for y in (cy - pad)..=(cy + pad) {
        for x in (cx - pad)..=(cx + pad) {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let dist = (p - center).length();
            let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                canvas.blend(x, y, cmd.color, coverage);
            }
        }
    }
}
