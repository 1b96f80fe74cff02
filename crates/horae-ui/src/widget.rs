use horae_engine::coords::Rect;

use crate::painter::Painter;

/// The contract every paintable control implements.
pub trait Widget {
    /// Draw this widget into `painter` within the bounds of `rect`.
    ///
    /// `rect` is the space allocated by the host — the widget draws inside
    /// it. A degenerate rect must draw nothing.
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect);

    /// Host notification that the allocated size or pixel density changed.
    ///
    /// Widgets drop size-derived caches here; the default does nothing.
    fn on_resize(&mut self) {}
}
