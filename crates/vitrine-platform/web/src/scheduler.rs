//! [`Scheduler`] backed by the browser event loop.

use gloo::render::request_animation_frame;
use gloo::timers::callback::Timeout;
use vitrine_core::{Duration, FrameCallback, ScheduledTask, Scheduler, TimerCallback};

/// Uses `requestAnimationFrame` for frames and `setTimeout` for timers.
/// Dropping the returned task drops the gloo handle, which cancels it.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn request_frame(&self, callback: FrameCallback) -> ScheduledTask {
        let frame = request_animation_frame(callback);
        ScheduledTask::new(move || drop(frame))
    }

    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> ScheduledTask {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, callback);
        ScheduledTask::new(move || drop(timeout))
    }
}
