use std::cell::RefCell;
use std::rc::{Rc, Weak};
use vitrine_core::{FrameCallback, ScheduledTask, Scheduler, TimerCallback};
use web_time::Duration;

/// Virtual time between two frames (~60 FPS).
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

struct PendingTimer {
    id: u64,
    due: Duration,
    callback: TimerCallback,
}

#[derive(Default)]
struct SchedulerState {
    now: Duration,
    next_id: u64,
    frames: Vec<(u64, FrameCallback)>,
    timers: Vec<PendingTimer>,
}

impl SchedulerState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn cancel(&mut self, id: u64) {
        self.frames.retain(|(queued, _)| *queued != id);
        self.timers.retain(|timer| timer.id != id);
    }
}

/// Deterministic [`Scheduler`] driven by the test.
///
/// Callbacks never run inside `request_frame`/`set_timeout`; they run only
/// from [`run_frame`](Self::run_frame) and [`advance`](Self::advance), with
/// no internal borrow held, so they may schedule or cancel further work.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scheduler as the trait object components expect.
    pub fn handle(&self) -> Rc<dyn Scheduler> {
        Rc::new(self.clone())
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Runs the frame callbacks queued so far at the current time. Callbacks
    /// queued while running wait for the next frame. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let (now, frames) = {
            let mut state = self.state.borrow_mut();
            (state.now, std::mem::take(&mut state.frames))
        };
        let count = frames.len();
        let timestamp = now.as_secs_f64() * 1000.0;
        for (_, callback) in frames {
            callback(timestamp);
        }
        count
    }

    /// Advances the clock by one [`FRAME_INTERVAL`] and runs a frame.
    pub fn advance_frame(&self) -> usize {
        self.advance(FRAME_INTERVAL);
        self.run_frame()
    }

    /// Runs frames until none are re-armed, up to `limit`. Returns the number
    /// of frames that had work.
    pub fn run_frames_until_idle(&self, limit: usize) -> usize {
        let mut frames = 0;
        while frames < limit && self.pending_frames() > 0 {
            self.advance_frame();
            frames += 1;
        }
        frames
    }

    /// Moves the clock forward, firing due timers in deadline order.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| (timer.due, timer.id))
                    .map(|(index, _)| index);
                due.map(|index| {
                    let timer = state.timers.remove(index);
                    log::trace!("manual scheduler: timer {} fires at {:?}", timer.id, timer.due);
                    state.now = timer.due;
                    timer.callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }

    fn cancel_hook(&self, id: u64) -> ScheduledTask {
        let state: Weak<RefCell<SchedulerState>> = Rc::downgrade(&self.state);
        ScheduledTask::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().cancel(id);
            }
        })
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> ScheduledTask {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id();
            state.frames.push((id, callback));
            id
        };
        self.cancel_hook(id)
    }

    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> ScheduledTask {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id();
            let due = state.now + delay;
            state.timers.push(PendingTimer { id, due, callback });
            id
        };
        self.cancel_hook(id)
    }
}
