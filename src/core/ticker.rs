//! Tick scheduling
//!
//! Single-threaded fire-and-continue loop. The callback runs to completion
//! before the next tick; `stop` is idempotent and no tick fires after it
//! returns, because the flag is checked before every callback invocation.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[derive(Debug, Default)]
pub(crate) struct Ticker {
    stopped: Arc<AtomicBool>,
}

#[derive(Debug, Clone)]
pub(crate) struct TickerHandle {
    stopped: Arc<AtomicBool>,
}

impl TickerHandle {
    pub(crate) fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }
}

impl Ticker {
    pub(crate) fn new() -> Self {
        Ticker::default()
    }

    pub(crate) fn handle(&self) -> TickerHandle {
        TickerHandle {
            stopped: Arc::clone(&self.stopped),
        }
    }

    pub(crate) fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Drive `on_tick` every `interval` until it breaks or the ticker is
    /// stopped. Blocks the calling thread.
    pub(crate) fn run(&self, interval: Duration, mut on_tick: impl FnMut() -> ControlFlow<()>) {
        loop {
            if self.is_stopped() {
                break;
            }
            if let ControlFlow::Break(()) = on_tick() {
                break;
            }
            if self.is_stopped() {
                break;
            }
            std::thread::sleep(interval);
        }
    }
}
