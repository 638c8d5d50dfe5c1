//! Cancellable delayed task, keyed by a generation counter.
//!
//! Each [`Debouncer::schedule`] call returns a [`Ticket`] and invalidates every ticket
//! handed out before it. A caller awaits [`Debouncer::settled`] with its ticket and runs
//! the action only if that resolves to `true`, i.e. nothing else was scheduled (or
//! cancelled) during the quiet period.
//!
//! The quiet period runs on `tokio::time` natively and on browser timers
//! (`gloo-timers`) under the `web` feature.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Handle for one scheduled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, generation: Arc::new(AtomicU64::new(0)) }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restart the quiet period. Any earlier ticket will no longer fire.
    pub fn schedule(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Invalidate whatever is pending without scheduling anything new.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Whether `ticket` is still the latest one.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Wait out the quiet period, then report whether `ticket` survived it.
    pub async fn settled(&self, ticket: Ticket) -> bool {
        self.settled_after(ticket, sleep(self.delay)).await
    }

    /// Like [`settled`](Self::settled), but the quiet period is whatever `quiet` awaits.
    pub async fn settled_after(&self, ticket: Ticket, quiet: impl Future<Output = ()>) -> bool {
        quiet.await;
        self.is_current(ticket)
    }
}

#[cfg(feature = "web")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(feature = "web"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}
