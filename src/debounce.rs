//! Debounced action scheduling.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Defers an action until a quiet period with no further schedules elapses.
/// Each `schedule` cancels the pending timer, so at most one deferred action
/// fires per quiet period. Clones share the same pending timer.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule<F>(&self, action: F)
    where
        F: FnOnce() + 'static,
    {
        if let Some(previous) = self.pending.borrow_mut().take() {
            previous.cancel();
        }

        // A spent handle may linger here until the next schedule or cancel;
        // cancelling an already-fired timeout is a no-op.
        *self.pending.borrow_mut() = Some(Timeout::new(self.delay_ms, action));
    }

    /// Drop any pending action without running it.
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.borrow_mut().take() {
            previous.cancel();
        }
    }
}
