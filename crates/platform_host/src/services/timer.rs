//! Cooperative delay contracts.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`TimerService`].
pub type TimerFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Host service that yields to the event loop for a fixed duration.
pub trait TimerService {
    /// Completes after roughly `ms` milliseconds.
    fn sleep_ms(&self, ms: u32) -> TimerFuture<'_>;
}

#[derive(Debug, Clone, Default)]
/// Timer that completes immediately and tallies the requested delay.
pub struct InstantTimerService {
    slept_ms: Rc<Cell<u64>>,
}

impl InstantTimerService {
    /// Total milliseconds requested so far.
    pub fn slept_ms(&self) -> u64 {
        self.slept_ms.get()
    }
}

impl TimerService for InstantTimerService {
    fn sleep_ms(&self, ms: u32) -> TimerFuture<'_> {
        self.slept_ms
            .set(self.slept_ms.get().saturating_add(u64::from(ms)));
        Box::pin(async {})
    }
}
