use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use pixels::{Pixels, SurfaceTexture};

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Vec2;
use crate::core::{App, AppControl, FrameCtx};
use crate::raster::Canvas;
use crate::time::{FrameClock, RepaintTick, RepaintTicker, WallTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Initial window size in logical pixels.
    pub initial_size: LogicalSize<f64>,
    /// Cadence of the repaint ticker.
    pub repaint_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "horae".to_string(),
            initial_size: LogicalSize::new(480.0, 480.0),
            repaint_interval: Duration::from_millis(50),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` inside a window until it exits or the window closes.
    ///
    /// The repaint ticker is owned by this call and stopped deterministically
    /// when the event loop ends, whatever the exit path.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::<RepaintTick>::with_user_event()
            .build()
            .context("failed to create winit EventLoop")?;

        let mut ticker = RepaintTicker::spawn(event_loop.create_proxy(), config.repaint_interval)
            .context("failed to spawn repaint ticker")?;

        let mut state = RuntimeState {
            config,
            app,
            surface: None,
            clock: FrameClock::new(),
        };

        let result = event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error");

        ticker.stop();
        result
    }
}

// The framebuffer borrows the window it presents to, so the pair lives in a
// self-referencing cell, the same way GPU surfaces are usually tied to their
// window.
#[self_referencing]
struct Surface {
    size: PhysicalSize<u32>,

    window: Arc<Window>,

    #[borrows(window)]
    #[covariant]
    pixels: Pixels<'this>,
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    app: A,
    surface: Option<Surface>,
    clock: FrameClock,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn create_surface(&self, event_loop: &ActiveEventLoop) -> Result<Surface> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let (w, h) = (size.width.max(1), size.height.max(1));

        SurfaceTryBuilder {
            size,
            window,
            pixels_builder: |window| {
                let texture = SurfaceTexture::new(w, h, window);
                Pixels::new(w, h, texture)
            },
        }
        .try_build()
        .context("failed to create framebuffer surface")
    }

    /// Forwards the current logical size to the app.
    ///
    /// This exists for one reason: size-derived caches must be invalidated
    /// before the next paint.
    fn notify_resize(&mut self) {
        let Some(surface) = &self.surface else { return };
        let scale = surface.borrow_window().scale_factor();
        let logical: LogicalSize<f64> = surface.borrow_size().to_logical(scale);
        self.app
            .on_resize(Vec2::new(logical.width as f32, logical.height as f32));
    }

    fn redraw(&mut self) -> AppControl {
        let Some(surface) = self.surface.as_mut() else {
            return AppControl::Continue;
        };

        let size = *surface.borrow_size();
        if size.width == 0 || size.height == 0 {
            // Minimized or degenerate; nothing observable to draw.
            return AppControl::Continue;
        }

        let time = self.clock.tick();
        if time.dt > self.config.repaint_interval.as_secs_f32() * 4.0 {
            log::debug!(
                "frame {} stalled: {:.0} ms since last redraw",
                time.frame_index,
                time.dt * 1000.0
            );
        }
        let wall = WallTime::now();
        let app = &mut self.app;
        let mut control = AppControl::Continue;

        surface.with_mut(|fields| {
            let scale = fields.window.scale_factor() as f32;
            let (w, h) = (fields.size.width as usize, fields.size.height as usize);
            let viewport = Vec2::new(w as f32 / scale, h as f32 / scale);

            // Scope: the canvas borrow of the framebuffer must end before
            // the frame is presented.
            {
                let canvas = Canvas::new(fields.pixels.frame_mut(), w, h, scale);
                let mut ctx = FrameCtx {
                    canvas,
                    viewport,
                    scale,
                    time,
                    wall,
                };
                control = app.on_frame(&mut ctx);
            }

            fields.window.pre_present_notify();
            if let Err(e) = fields.pixels.render() {
                log::error!("failed to present frame: {e}");
            }
        });

        control
    }
}

impl<A> ApplicationHandler<RepaintTick> for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // The ticker drives redraws; the loop itself only waits.
        event_loop.set_control_flow(ControlFlow::Wait);

        if self.surface.is_some() {
            return;
        }

        match self.create_surface(event_loop) {
            Ok(surface) => {
                surface.borrow_window().request_redraw();
                self.surface = Some(surface);
            }
            Err(e) => {
                log::error!("failed to create window surface: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, _event: RepaintTick) {
        if let Some(surface) = &self.surface {
            surface.borrow_window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.surface = None;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                let Some(surface) = self.surface.as_mut() else {
                    return;
                };
                surface.with_mut(|fields| {
                    *fields.size = new_size;
                    if new_size.width > 0 && new_size.height > 0 {
                        if let Err(e) = fields.pixels.resize_surface(new_size.width, new_size.height)
                        {
                            log::error!("failed to resize surface: {e}");
                        }
                        if let Err(e) = fields.pixels.resize_buffer(new_size.width, new_size.height)
                        {
                            log::error!("failed to resize framebuffer: {e}");
                        }
                    }
                });
                self.notify_resize();
                if let Some(surface) = &self.surface {
                    surface.borrow_window().request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                // Label measurements are scale-dependent.
                self.notify_resize();
                if let Some(surface) = &self.surface {
                    surface.borrow_window().request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if self.redraw() == AppControl::Exit {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}
