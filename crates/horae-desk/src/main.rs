use anyhow::Result;

use horae_engine::core::{App, AppControl, FrameCtx};
use horae_engine::coords::Vec2;
use horae_engine::logging::{init_logging, LoggingConfig};
use horae_engine::raster::Renderer;
use horae_engine::text::FontId;
use horae_engine::window::{Runtime, RuntimeConfig};
use horae_ui::scene::UiScene;
use horae_ui::widget::Widget;
use horae_ui::widgets::clock::Clock;

struct DeskApp {
    scene: UiScene,
    renderer: Renderer,
    clock: Clock,
}

impl App for DeskApp {
    fn on_resize(&mut self, _logical_size: Vec2) {
        self.clock.on_resize();
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        ctx.canvas.clear(self.clock.style().background);

        self.scene
            .frame(&self.clock, ctx.viewport, ctx.wall, ctx.scale);
        self.renderer
            .render(&mut ctx.canvas, &mut self.scene.draw_list, &self.scene.font_system);

        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut scene = UiScene::new();
    let font = match load_system_font() {
        Some(bytes) => scene.load_font(&bytes)?,
        None => {
            log::warn!("no system font found; the dial will draw without labels");
            FontId::FALLBACK
        }
    };

    let app = DeskApp {
        scene,
        renderer: Renderer::new(),
        clock: Clock::new(font),
    };

    Runtime::run(
        RuntimeConfig {
            title: "Horae".to_string(),
            ..RuntimeConfig::default()
        },
        app,
    )
}

/// First system font that loads. The dial runs without one; only the
/// numeric labels need glyphs.
fn load_system_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}
