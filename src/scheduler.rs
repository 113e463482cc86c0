use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Runs deferred work on the event loop.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> Self::Handle;

    /// Cancels a task that has not run yet.
    fn cancel(&self, handle: Self::Handle);
}

/// Keeps at most one deferred task alive; scheduling a new one cancels the
/// one still waiting.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Rc<Cell<Option<S::Handle>>>,
}

impl<S: Scheduler> Debouncer<S> {

    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn call<F>(&self, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();

        let pending_weak = Rc::downgrade(&self.pending);
        let handler = move || {
            // the handle of a task that already ran must never be cancelled
            if let Some(pending) = pending_weak.upgrade() {
                pending.take();
            }
            task();
        };

        let handle = self.scheduler.schedule(self.delay, Box::new(handler));
        self.pending.set(Some(handle));
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        let handle = self.pending.take();
        let is_pending = handle.is_some();
        self.pending.set(handle);
        is_pending
    }
}

#[cfg(feature = "ui")]
pub use self::glib_scheduler::GlibScheduler;

#[cfg(feature = "ui")]
mod glib_scheduler {
    use super::Scheduler;
    use std::time::Duration;

    /// Timeouts on the default GLib main context.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct GlibScheduler;

    impl Scheduler for GlibScheduler {
        type Handle = glib::SourceId;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> glib::SourceId {
            glib::timeout_add_local_once(delay, task)
        }

        fn cancel(&self, handle: glib::SourceId) {
            handle.remove();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    const DELAY: Duration = Duration::from_millis(350);

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let calls_for_task = Rc::clone(&calls);
        let make_task = move |value: &'static str| -> Box<dyn FnOnce()> {
            let calls = Rc::clone(&calls_for_task);
            Box::new(move || calls.borrow_mut().push(value))
        };
        (calls, make_task)
    }

    #[test]
    fn runs_task_after_the_quiet_period() {
        let scheduler = ManualScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), DELAY);
        let (calls, task) = recorder();

        debouncer.call(task("a"));
        assert!(debouncer.is_pending());

        scheduler.advance(Duration::from_millis(349));
        assert!(calls.borrow().is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*calls.borrow(), vec!["a"]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn newer_call_supersedes_pending_one() {
        let scheduler = ManualScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), DELAY);
        let (calls, task) = recorder();

        debouncer.call(task("a"));
        scheduler.advance(Duration::from_millis(200));
        debouncer.call(task("ab"));
        scheduler.advance(Duration::from_millis(200));
        debouncer.call(task("abc"));
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(DELAY);
        assert_eq!(*calls.borrow(), vec!["abc"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancel_drops_pending_task() {
        let scheduler = ManualScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), DELAY);
        let (calls, task) = recorder();

        debouncer.call(task("a"));
        debouncer.cancel();
        scheduler.advance(DELAY * 2);

        assert!(calls.borrow().is_empty());
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn call_after_fired_task_does_not_cancel_it_twice() {
        let scheduler = ManualScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), DELAY);
        let (calls, task) = recorder();

        debouncer.call(task("a"));
        scheduler.advance(DELAY);
        debouncer.call(task("b"));
        scheduler.advance(DELAY);

        assert_eq!(*calls.borrow(), vec!["a", "b"]);
        assert_eq!(scheduler.cancelled(), 0);
    }
}
