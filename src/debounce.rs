//! Trailing-edge debouncing over an abstract timer.
//!
//! A [`Debounced`] wrapper collapses a burst of calls into a single call of
//! the wrapped callback once the quiet period has elapsed, using the
//! arguments of the last call. Timers come from a [`Scheduler`]; dropping a
//! scheduler handle must cancel its task, which is how a newer call
//! supersedes a pending one.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Quiet period used when none is configured: fire on the next tick.
pub const DEFAULT_DELAY_MS: u32 = 0;

/// Source of one-shot timers.
pub trait Scheduler {
    /// Dropping the handle cancels the task if it has not run yet.
    type Handle;

    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// A debounced callback. Clones share the same pending timer.
pub struct Debounced<A, S: Scheduler> {
    inner: Rc<Inner<A, S>>,
}

struct Inner<A, S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    callback: Rc<dyn Fn(A)>,
    pending: RefCell<Option<S::Handle>>,
}

impl<A, S: Scheduler> Clone for Debounced<A, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<A: 'static, S: Scheduler> Debounced<A, S> {
    #[must_use]
    pub fn new(scheduler: S, delay_ms: u32, callback: impl Fn(A) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                delay_ms,
                callback: Rc::new(callback),
                pending: RefCell::new(None),
            }),
        }
    }

    /// Schedule the callback with `args`, cancelling any pending call.
    pub fn call(&self, args: A) {
        let callback = Rc::clone(&self.inner.callback);
        let handle = self
            .inner
            .scheduler
            .schedule(self.inner.delay_ms, Box::new(move || callback(args)));
        // The replaced handle is dropped here, which cancels it.
        drop(self.inner.pending.replace(Some(handle)));
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.inner.delay_ms
    }
}

/// Wrap `callback` with the default quiet period.
pub fn debounce<A: 'static, S: Scheduler>(scheduler: S, callback: impl Fn(A) + 'static) -> Debounced<A, S> {
    Debounced::new(scheduler, DEFAULT_DELAY_MS, callback)
}
