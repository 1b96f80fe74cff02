use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use winit::event_loop::EventLoopProxy;

/// User event posted to the event loop by [`RepaintTicker`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RepaintTick;

/// Periodic repaint signal.
///
/// A background thread posts [`RepaintTick`] to the winit event loop at a
/// fixed cadence; the runtime answers each tick with `request_redraw`. The
/// thread owns no drawing state and does no work besides signalling, so
/// ticks the host coalesces or drops are harmless — every frame reads the
/// current wall clock.
///
/// The thread stops when [`stop`](Self::stop) runs (also from `Drop`) or
/// when the event loop has shut down and the proxy send fails.
#[derive(Debug)]
pub struct RepaintTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RepaintTicker {
    /// Spawns the ticker thread posting to `proxy` every `period`.
    pub fn spawn(proxy: EventLoopProxy<RepaintTick>, period: Duration) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("horae-repaint".to_string())
            .spawn(move || {
                loop {
                    thread::sleep(period);
                    if thread_stop.load(Ordering::Relaxed) {
                        break;
                    }
                    if proxy.send_event(RepaintTick).is_err() {
                        // Event loop is gone; nothing left to signal.
                        break;
                    }
                }
            })?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Stops the ticker and joins its thread. Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RepaintTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
