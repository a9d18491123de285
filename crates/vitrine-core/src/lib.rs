//! Host scheduling primitives for Vitrine.
//!
//! Components never call `requestAnimationFrame` or `setTimeout` themselves.
//! They ask a [`Scheduler`] for work and hold on to the returned
//! [`ScheduledTask`]; dropping the task cancels whatever is still pending.

mod debounce;
mod platform;
mod task;

pub use debounce::Debouncer;
pub use platform::{FrameCallback, Scheduler, TimerCallback};
pub use task::ScheduledTask;

pub use web_time::Duration;

pub mod prelude {
    pub use crate::debounce::Debouncer;
    pub use crate::platform::Scheduler;
    pub use crate::task::ScheduledTask;
}
