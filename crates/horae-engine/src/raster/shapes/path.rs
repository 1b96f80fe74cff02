use crate::coords::Vec2;
use crate::raster::Canvas;
use crate::scene::shapes::path::PathCmd;

/// Arc flattening tolerance in physical pixels.
const FLATTEN_TOLERANCE: f32 = 0.25;

/// Vertical sub-scanlines per pixel row.
const SUBSAMPLES: usize = 4;

/// Reusable buffers for the polygon fill.
#[derive(Debug, Default)]
pub struct PathScratch {
    points: Vec<Vec2>,
    crossings: Vec<f32>,
    coverage: Vec<f32>,
}

/// Fills a closed path.
///
/// The path is flattened at physical scale, placed by the command's local
/// transform, then scanline-filled: `SUBSAMPLES` sub-scanlines per pixel
/// row give vertical anti-aliasing, fractional span ends the horizontal.
/// Even-odd winding, which the rounded-rectangle family never exercises
/// beyond a single outline.
pub fn draw(canvas: &mut Canvas<'_>, cmd: &PathCmd, scratch: &mut PathScratch) {
    let scale = canvas.scale();

    cmd.path
        .flatten_into(FLATTEN_TOLERANCE / scale, &mut scratch.points);
    for p in scratch.points.iter_mut() {
        *p = cmd.transform.apply(*p) * scale;
    }

    let points = &scratch.points[..];
    if points.len() < 3 || points.iter().any(|p| !p.is_finite()) {
        return;
    }

    let mut min = points[0];
    let mut max = points[0];
    for &p in &points[1..] {
        min = min.min(p);
        max = max.max(p);
    }

    let y0 = (min.y.floor() as i32).max(0);
    let y1 = (max.y.ceil() as i32).min(canvas.height() as i32 - 1);
    let x0 = (min.x.floor() as i32).max(0);
    let x1 = (max.x.ceil() as i32).min(canvas.width() as i32 - 1);
    if y1 < y0 || x1 < x0 {
        return;
    }
    let row_width = (x1 - x0 + 1) as usize;

    for y in y0..=y1 {
        scratch.coverage.clear();
        scratch.coverage.resize(row_width, 0.0);

        for sub in 0..SUBSAMPLES {
            let sy = y as f32 + (sub as f32 + 0.5) / SUBSAMPLES as f32;

            scratch.crossings.clear();
            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                if (a.y <= sy) != (b.y <= sy) {
                    let t = (sy - a.y) / (b.y - a.y);
                    scratch.crossings.push(a.x + t * (b.x - a.x));
                }
            }
            scratch.crossings.sort_by(f32::total_cmp);

            for span in scratch.crossings.chunks_exact(2) {
                accumulate_span(
                    &mut scratch.coverage,
                    x0,
                    span[0],
                    span[1],
                    1.0 / SUBSAMPLES as f32,
                );
            }
        }

        for (i, &coverage) in scratch.coverage.iter().enumerate() {
            if coverage > 0.0 {
                canvas.blend(x0 + i as i32, y, cmd.color, coverage);
            }
        }
    }
}

/// Adds the horizontal span `[left, right)` into per-pixel coverage, with
/// fractional ends.
fn accumulate_span(coverage: &mut [f32], origin: i32, left: f32, right: f32, weight: f32) {
    if right <= left {
        return;
    }
    let first = left.floor() as i32;
    let last = (right.ceil() as i32) - 1;
    for px in first..=last {
        let i = px - origin;
        if i < 0 || i as usize >= coverage.len() {
            continue;
        }
        let overlap = (right.min(px as f32 + 1.0) - left.max(px as f32)).clamp(0.0, 1.0);
        coverage[i as usize] += overlap * weight;
    }
}
