//! Platform abstraction for host scheduling.
//!
//! The browser implementation forwards to animation frames and timeouts; the
//! test harness keeps a virtual clock. Both run callbacks on the calling
//! thread, never re-entrantly inside the call that scheduled them.

use crate::ScheduledTask;
use web_time::Duration;

/// Callback run on the next frame, receiving the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Callback run once a timeout elapses.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Schedules deferred work on the host event loop.
pub trait Scheduler {
    /// Request that `callback` runs before the next repaint.
    fn request_frame(&self, callback: FrameCallback) -> ScheduledTask;

    /// Request that `callback` runs once `delay` has elapsed.
    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> ScheduledTask;
}
