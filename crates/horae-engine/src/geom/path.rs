use crate::coords::{Rect, Vec2};

/// Single element of a [`Path`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Elliptical arc inscribed in `bounds`, starting at `start_deg` and
    /// sweeping `sweep_deg` clockwise. Angles are measured from the +x axis
    /// in y-down screen coordinates, canvas-style. An arc that does not
    /// begin at the current point implies a connecting line.
    Arc {
        bounds: Rect,
        start_deg: f32,
        sweep_deg: f32,
    },
    Close,
}

/// A closed 2D outline assembled from move/line/arc elements.
///
/// One `Path` describes a single closed figure; the rasterizer treats the
/// flattened point list as a closed polygon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    els: Vec<PathEl>,
}

/// Largest number of chords an arc flattens to, whatever the tolerance asks.
const MAX_ARC_SEGMENTS: usize = 64;

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.els.push(PathEl::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Vec2) {
        self.els.push(PathEl::LineTo(p));
    }

    pub fn arc(&mut self, bounds: Rect, start_deg: f32, sweep_deg: f32) {
        debug_assert!(sweep_deg >= 0.0, "arcs sweep clockwise (non-negative)");
        self.els.push(PathEl::Arc {
            bounds,
            start_deg,
            sweep_deg,
        });
    }

    pub fn close(&mut self) {
        self.els.push(PathEl::Close);
    }

    /// Plain rectangle outline: the four corners, no arcs.
    pub fn rect(rect: Rect) -> Self {
        let mut path = Self::new();
        path.move_to(rect.min());
        path.line_to(Vec2::new(rect.max().x, rect.min().y));
        path.line_to(rect.max());
        path.line_to(Vec2::new(rect.min().x, rect.max().y));
        path.close();
        path
    }

    /// Ellipse inscribed in `bounds`; a full 360° arc.
    pub fn ellipse(bounds: Rect) -> Self {
        let mut path = Self::new();
        path.arc(bounds, 0.0, 360.0);
        path.close();
        path
    }

    /// Analytic bounds of the outline: line endpoints, arc endpoints, and
    /// the arc's axis extremes that fall inside its sweep.
    ///
    /// Returns `None` for an empty path.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut min: Option<Vec2> = None;
        let mut max = Vec2::zero();

        let mut include = |p: Vec2| match min {
            None => {
                min = Some(p);
                max = p;
            }
            Some(m) => {
                min = Some(m.min(p));
                max = max.max(p);
            }
        };

        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => include(p),
                PathEl::Arc {
                    bounds,
                    start_deg,
                    sweep_deg,
                } => {
                    include(arc_point(bounds, start_deg));
                    include(arc_point(bounds, start_deg + sweep_deg));
                    // Axis extremes (multiples of 90°) inside the sweep.
                    let mut k = (start_deg / 90.0).ceil();
                    while k * 90.0 <= start_deg + sweep_deg {
                        include(arc_point(bounds, k * 90.0));
                        k += 1.0;
                    }
                }
                PathEl::Close => {}
            }
        }

        min.map(|m| Rect::from_points(m, max))
    }

    /// Polygonal approximation of the figure.
    ///
    /// `tolerance` is the maximum chord error for arcs, in the path's own
    /// units.
    pub fn flatten(&self, tolerance: f32) -> Vec<Vec2> {
        let mut points = Vec::new();
        self.flatten_into(tolerance, &mut points);
        points
    }

    /// Like [`flatten`](Self::flatten), reusing `points` as storage.
    pub fn flatten_into(&self, tolerance: f32, points: &mut Vec<Vec2>) {
        points.clear();
        let tolerance = tolerance.max(1e-3);

        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => push_point(points, p),
                PathEl::Arc {
                    bounds,
                    start_deg,
                    sweep_deg,
                } => {
                    // A gap between the current point and the arc start is an
                    // implied straight edge; pushing the start point forms it.
                    push_point(points, arc_point(bounds, start_deg));

                    let n = arc_segments(bounds, sweep_deg, tolerance);
                    for k in 1..=n {
                        let deg = start_deg + sweep_deg * (k as f32 / n as f32);
                        push_point(points, arc_point(bounds, deg));
                    }
                }
                // The polygon closes implicitly.
                PathEl::Close => {}
            }
        }
    }
}

/// Point on the ellipse inscribed in `bounds` at `deg` degrees from +x.
fn arc_point(bounds: Rect, deg: f32) -> Vec2 {
    let center = bounds.center();
    let rad = deg.to_radians();
    Vec2::new(
        center.x + bounds.size.x / 2.0 * rad.cos(),
        center.y + bounds.size.y / 2.0 * rad.sin(),
    )
}

/// Chord count keeping the sagitta under `tolerance`.
fn arc_segments(bounds: Rect, sweep_deg: f32, tolerance: f32) -> usize {
    let radius = (bounds.size.x.max(bounds.size.y) / 2.0).abs();
    if !radius.is_finite() || radius <= tolerance {
        return 2;
    }
    let step = 2.0 * (1.0 - tolerance / radius).clamp(-1.0, 1.0).acos();
    let sweep = sweep_deg.to_radians();
    ((sweep / step.max(1e-3)).ceil() as usize).clamp(2, MAX_ARC_SEGMENTS)
}

fn push_point(points: &mut Vec<Vec2>, p: Vec2) {
    if let Some(&last) = points.last() {
        if (p - last).length() < 1e-4 {
            return;
        }
    }
    points.push(p);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_path_is_four_corners_no_arcs() {
        let path = Path::rect(Rect::new(1.0, 2.0, 10.0, 4.0));
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Vec2::new(1.0, 2.0)),
                PathEl::LineTo(Vec2::new(11.0, 2.0)),
                PathEl::LineTo(Vec2::new(11.0, 6.0)),
                PathEl::LineTo(Vec2::new(1.0, 6.0)),
                PathEl::Close,
            ]
        );
    }

    #[test]
    fn ellipse_bounding_box_is_its_bounds() {
        let bounds = Rect::new(-3.0, 1.0, 8.0, 4.0);
        let bbox = Path::ellipse(bounds).bounding_box().unwrap();
        assert!((bbox.origin.x - bounds.origin.x).abs() < 1e-4);
        assert!((bbox.origin.y - bounds.origin.y).abs() < 1e-4);
        assert!((bbox.size.x - bounds.size.x).abs() < 1e-4);
        assert!((bbox.size.y - bounds.size.y).abs() < 1e-4);
    }

    #[test]
    fn quarter_arc_bbox_includes_axis_extreme() {
        // Top-left quarter: 180° → 270° passes the left (180°) and top (270°)
        // extremes of the ellipse.
        let mut path = Path::new();
        path.arc(Rect::new(0.0, 0.0, 10.0, 10.0), 180.0, 90.0);
        let bbox = path.bounding_box().unwrap();
        assert!((bbox.min().x - 0.0).abs() < 1e-4);
        assert!((bbox.min().y - 0.0).abs() < 1e-4);
    }

    #[test]
    fn flattened_circle_points_lie_on_the_circle() {
        let path = Path::ellipse(Rect::new(0.0, 0.0, 20.0, 20.0));
        let points = path.flatten(0.1);
        assert!(points.len() >= 8);
        for p in points {
            let r = (p - Vec2::new(10.0, 10.0)).length();
            assert!((r - 10.0).abs() < 0.1 + 1e-3, "point off circle: r = {r}");
        }
    }

    #[test]
    fn arc_away_from_current_point_implies_a_connecting_edge() {
        let mut path = Path::new();
        path.move_to(Vec2::new(100.0, 0.0));
        path.arc(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, 90.0);
        let points = path.flatten(0.5);
        assert_eq!(points[0], Vec2::new(100.0, 0.0));
        // Arc start = right extreme of the ellipse.
        assert!((points[1] - Vec2::new(10.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn tighter_tolerance_means_more_segments() {
        let path = Path::ellipse(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(path.flatten(0.05).len() > path.flatten(2.0).len());
    }

    #[test]
    fn empty_path_has_no_bounds() {
        assert!(Path::new().bounding_box().is_none());
        assert!(Path::new().flatten(0.25).is_empty());
    }
}
