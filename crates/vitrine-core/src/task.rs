/// Handle to work queued on a [`Scheduler`](crate::Scheduler).
///
/// Dropping the handle cancels the work if it has not run yet. Cancelling
/// work that already ran is a no-op, so owners may keep the handle of a
/// callback that is currently executing and replace it from inside.
#[must_use = "dropping a ScheduledTask cancels it"]
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    /// Wraps the host-specific cancellation hook.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel.
    pub fn inactive() -> Self {
        Self { cancel: None }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn drop_runs_cancel_hook_once() {
        let cancelled = Rc::new(Cell::new(0));
        let task = {
            let cancelled = Rc::clone(&cancelled);
            ScheduledTask::new(move || cancelled.set(cancelled.get() + 1))
        };
        assert!(task.is_active());
        drop(task);
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn explicit_cancel_does_not_fire_again_on_drop() {
        let cancelled = Rc::new(Cell::new(0));
        let task = {
            let cancelled = Rc::clone(&cancelled);
            ScheduledTask::new(move || cancelled.set(cancelled.get() + 1))
        };
        task.cancel();
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn inactive_task_is_inert() {
        let task = ScheduledTask::inactive();
        assert!(!task.is_active());
        task.cancel();
    }
}
