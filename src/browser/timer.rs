//! Browser timers for [`crate::debounce`].

use gloo_timers::callback::Timeout;

use crate::debounce::Scheduler;

/// `setTimeout`-backed scheduler. Dropping the returned [`Timeout`] clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
