//! Horae UI — widget layer on top of `horae-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use horae_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(&font_bytes).unwrap();
//! let clock = Clock::new(font);
//!
//! // In your frame callback:
//! scene.frame(&clock, viewport, wall, scale);
//! // Pass scene.draw_list to the engine's Renderer.
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`widget::Widget`] for any type:
//!
//! ```rust,ignore
//! use horae_ui::prelude::*;
//!
//! pub struct Crosshair { color: Color }
//!
//! impl Widget for Crosshair {
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         let c = rect.center();
//!         painter.line(Vec2::new(rect.min().x, c.y), Vec2::new(rect.max().x, c.y), 1.0, self.color);
//!         painter.line(Vec2::new(c.x, rect.min().y), Vec2::new(c.x, rect.max().y), 1.0, self.color);
//!     }
//! }
//! ```

pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build and host the dial.
pub mod prelude {
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::Widget;
    pub use crate::widgets::clock::{Clock, ClockStyle};

    // Re-export the engine primitives everyone needs.
    pub use horae_engine::coords::{Rect, Vec2};
    pub use horae_engine::paint::Color;
    pub use horae_engine::text::FontId;
    pub use horae_engine::time::WallTime;
}
