use crate::coords::Vec2;
use crate::raster::Canvas;
use crate::scene::shapes::line::LineCmd;

/// Anti-aliased thick line.
///
/// Coverage per pixel is the distance from the pixel center to the segment,
/// feathered over one pixel at the stroke edge.
pub fn draw(canvas: &mut Canvas<'_>, cmd: &LineCmd) {
    let scale = canvas.scale();
    let p0 = cmd.p0 * scale;
    let p1 = cmd.p1 * scale;
    if !p0.is_finite() || !p1.is_finite() {
        return;
    }
    let half_width = (cmd.width * scale).max(1.0) / 2.0;

    let pad = half_width.ceil() as i32 + 1;
    let min_x = p0.x.min(p1.x).floor() as i32 - pad;
    let max_x = p0.x.max(p1.x).ceil() as i32 + pad;
    let min_y = p0.y.min(p1.y).floor() as i32 - pad;
    let max_y = p0.y.max(p1.y).ceil() as i32 + pad;

    let d = p1 - p0;
    let len_sq = d.dot(d).max(f32::EPSILON);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let t = ((p - p0).dot(d) / len_sq).clamp(0.0, 1.0);
            let dist = (p - (p0 + d * t)).length();
            let coverage = (half_width + 0.5 - dist).clamp(0.0, 1.0);
            if coverage > 0.0 {
                canvas.blend(x, y, cmd.color, coverage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn horizontal_line_covers_its_row_and_not_the_corners() {
        let mut frame = vec![0u8; 16 * 9 * 4];
        let mut canvas = Canvas::new(&mut frame, 16, 9, 1.0);
        let cmd = LineCmd {
            p0: Vec2::new(2.0, 4.5),
            p1: Vec2::new(14.0, 4.5),
            width: 1.0,
            color: Color::from_straight(1.0, 1.0, 1.0, 1.0),
        };
        draw(&mut canvas, &cmd);

        let px = |x: usize, y: usize| frame[(y * 16 + x) * 4];
        assert!(px(8, 4) > 200, "center of the stroke should be lit");
        assert_eq!(px(0, 0), 0, "far corner must stay untouched");
        assert_eq!(px(8, 0), 0, "row far above the stroke must stay untouched");
    }
}
