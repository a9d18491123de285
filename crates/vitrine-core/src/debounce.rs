//! Trailing-edge debounce on top of a [`Scheduler`].
//!
//! Every call to [`Debouncer::schedule`] replaces the pending callback, so
//! only the last call of a burst runs, `delay` after that call.

use crate::{Scheduler, ScheduledTask};
use std::cell::Cell;
use std::rc::Rc;
use web_time::Duration;

pub struct Debouncer {
    delay: Duration,
    pending: Option<ScheduledTask>,
    armed: Rc<Cell<bool>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            armed: Rc::new(Cell::new(false)),
        }
    }

    /// Schedules `callback`, cancelling the previously pending one.
    pub fn schedule(&mut self, scheduler: &dyn Scheduler, callback: impl FnOnce() + 'static) {
        if self.is_pending() {
            log::trace!("debounce: restarting {:?} quiet period", self.delay);
        }
        self.armed.set(false);
        let armed = Rc::new(Cell::new(true));
        let flag = Rc::clone(&armed);
        let task = scheduler.set_timeout(
            self.delay,
            Box::new(move || {
                flag.set(false);
                callback();
            }),
        );
        // Replacing the handle drops, and thereby cancels, the previous timer.
        self.pending = Some(task);
        self.armed = armed;
    }

    /// Returns true while a scheduled callback has neither run nor been cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some() && self.armed.get()
    }

    pub fn cancel(&mut self) {
        self.armed.set(false);
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}
