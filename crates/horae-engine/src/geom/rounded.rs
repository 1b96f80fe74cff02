use crate::coords::Rect;

use super::Path;

/// Builds the closed outline of `rect` with the given corner radius.
///
/// - `radius <= 0` yields the plain rectangle.
/// - `radius >= min(width, height) / 2` yields a capsule: two semicircular
///   caps of diameter `min(width, height)` joined by straight sides along
///   the longer axis. A square degenerates to a full circle.
/// - Anything in between yields a rectangle with four 90° corner arcs,
///   traversed top-left → top-right → bottom-right → bottom-left.
pub fn rounded_rect(rect: Rect, radius: f32) -> Path {
    if radius <= 0.0 {
        return Path::rect(rect);
    }
    if radius >= rect.size.x.min(rect.size.y) / 2.0 {
        return capsule(rect);
    }

    let (x, y) = (rect.origin.x, rect.origin.y);
    let (w, h) = (rect.size.x, rect.size.y);
    let d = radius * 2.0;

    let mut path = Path::new();
    path.arc(Rect::new(x, y, d, d), 180.0, 90.0);
    path.arc(Rect::new(x + w - d, y, d, d), 270.0, 90.0);
    path.arc(Rect::new(x + w - d, y + h - d, d, d), 0.0, 90.0);
    path.arc(Rect::new(x, y + h - d, d, d), 90.0, 90.0);
    path.close();
    path
}

/// Capsule along the longer axis.
///
/// Degenerate geometry must never abort a frame: a non-finite rectangle
/// falls back to the inscribed ellipse, and an exact square is a circle.
fn capsule(rect: Rect) -> Path {
    if !rect.is_finite() {
        return Path::ellipse(rect);
    }

    let (x, y) = (rect.origin.x, rect.origin.y);
    let (w, h) = (rect.size.x, rect.size.y);

    let mut path = Path::new();
    if w > h {
        let d = h;
        path.arc(Rect::new(x, y, d, d), 90.0, 180.0);
        path.arc(Rect::new(x + w - d, y, d, d), 270.0, 180.0);
    } else if w < h {
        let d = w;
        path.arc(Rect::new(x, y, d, d), 180.0, 180.0);
        path.arc(Rect::new(x, y + h - d, d, d), 0.0, 180.0);
    } else {
        return Path::ellipse(rect);
    }
    path.close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::geom::PathEl;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    fn assert_bbox_is(path: &Path, rect: Rect) {
        let bbox = path.bounding_box().unwrap();
        assert_close(bbox.origin.x, rect.origin.x);
        assert_close(bbox.origin.y, rect.origin.y);
        assert_close(bbox.size.x, rect.size.x);
        assert_close(bbox.size.y, rect.size.y);
    }

    fn arc_count(path: &Path) -> usize {
        path.elements()
            .iter()
            .filter(|el| matches!(el, PathEl::Arc { .. }))
            .count()
    }

    #[test]
    fn zero_radius_is_the_plain_rectangle() {
        let rect = Rect::new(2.0, 3.0, 8.0, 4.0);
        let path = rounded_rect(rect, 0.0);
        assert_eq!(path, Path::rect(rect));
        assert_eq!(arc_count(&path), 0);
        assert_bbox_is(&path, rect);
    }

    #[test]
    fn negative_radius_is_treated_as_zero() {
        let rect = Rect::new(0.0, 0.0, 8.0, 4.0);
        assert_eq!(rounded_rect(rect, -1.0), Path::rect(rect));
    }

    #[test]
    fn moderate_radius_has_four_corner_arcs() {
        let rect = Rect::new(0.0, 0.0, 20.0, 10.0);
        let path = rounded_rect(rect, 2.0);
        assert_eq!(arc_count(&path), 4);
        assert_bbox_is(&path, rect);

        // Corner order: top-left, top-right, bottom-right, bottom-left.
        let bounds: Vec<Rect> = path
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::Arc { bounds, .. } => Some(*bounds),
                _ => None,
            })
            .collect();
        assert_eq!(bounds[0].origin, Vec2::new(0.0, 0.0));
        assert_eq!(bounds[1].origin, Vec2::new(16.0, 0.0));
        assert_eq!(bounds[2].origin, Vec2::new(16.0, 6.0));
        assert_eq!(bounds[3].origin, Vec2::new(0.0, 6.0));
    }

    #[test]
    fn large_radius_is_a_horizontal_capsule() {
        let rect = Rect::new(0.0, 0.0, 20.0, 8.0);
        let path = rounded_rect(rect, 100.0);
        assert_eq!(arc_count(&path), 2);
        assert_bbox_is(&path, rect);

        // Two semicircular caps of diameter h, joined by straight sides of
        // length |w - h|: cap centers sit w - h apart.
        let caps: Vec<Rect> = path
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::Arc { bounds, .. } => Some(*bounds),
                _ => None,
            })
            .collect();
        assert_eq!(caps[0].size, Vec2::new(8.0, 8.0));
        assert_eq!(caps[1].size, Vec2::new(8.0, 8.0));
        assert_close(caps[1].center().x - caps[0].center().x, 12.0);
    }

    #[test]
    fn large_radius_is_a_vertical_capsule() {
        let rect = Rect::new(-2.0, 0.0, 4.0, 30.0);
        let path = rounded_rect(rect, 2.0);
        assert_eq!(arc_count(&path), 2);
        assert_bbox_is(&path, rect);
    }

    #[test]
    fn radius_exactly_half_the_short_side_is_a_capsule() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(arc_count(&rounded_rect(rect, 2.0)), 2);
    }

    #[test]
    fn square_degenerates_to_a_circle() {
        let rect = Rect::new(0.0, 0.0, 12.0, 12.0);
        let path = rounded_rect(rect, 6.0);
        assert_eq!(path, Path::ellipse(rect));
        assert_bbox_is(&path, rect);

        // Silhouette check: every flattened point is on the circle.
        for p in path.flatten(0.05) {
            assert_close((p - Vec2::new(6.0, 6.0)).length(), 6.0);
        }
    }

    #[test]
    fn non_finite_capsule_falls_back_to_the_inscribed_ellipse() {
        let rect = Rect::new(0.0, 0.0, f32::NAN, 4.0);
        assert_eq!(rounded_rect(rect, 100.0), Path::ellipse(rect));
    }
}
