//! Trailing-edge debounce for search and filter inputs.
//!
//! DESIGN
//! ======
//! The wrapper owns at most one pending timer. Each call stores a new timer
//! in that slot and the previous one is dropped, which cancels it. Outside
//! the browser there is no timer, so the callback runs immediately.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Holds the single pending timer; storing a new one drops the old.
pub struct PendingSlot<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> Default for PendingSlot<T> {
    fn default() -> Self {
        Self { slot: Rc::new(RefCell::new(None)) }
    }
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
impl<T> PendingSlot<T> {
    /// Store `next`, dropping whatever was pending after the borrow ends.
    pub fn replace(&self, next: T) {
        let previous = self.slot.borrow_mut().replace(next);
        drop(previous);
    }
}

/// Wrap `callback` so that only the last call in a burst runs, `wait_ms`
/// after the burst ends.
pub fn debounce<A, F>(wait_ms: u32, callback: F) -> impl Fn(A)
where
    A: 'static,
    F: Fn(A) + 'static,
{
    #[cfg(feature = "csr")]
    {
        let pending = PendingSlot::<gloo_timers::callback::Timeout>::default();
        let callback = Rc::new(callback);
        move |arg: A| {
            let callback = callback.clone();
            // A fired timer stays in the slot until the next call replaces it.
            pending.replace(gloo_timers::callback::Timeout::new(wait_ms, move || (*callback)(arg)));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = wait_ms;
        move |arg: A| callback(arg)
    }
}
