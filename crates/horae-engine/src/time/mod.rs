//! Frame timing, wall-clock reading, and the repaint ticker.

mod frame_clock;
mod ticker;
mod wall_clock;

pub use frame_clock::{FrameClock, FrameTime};
pub use ticker::{RepaintTick, RepaintTicker};
pub use wall_clock::WallTime;
