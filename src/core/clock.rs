//! The uptime clock
//!
//! Owns the mutable core state. Each tick reads the boot-time source,
//! computes elapsed seconds, feeds the history store and the milestone
//! tracker in that order, persists, and publishes the new elapsed value.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::consts::MIN_INTERVAL_SECS;
use crate::core::history::HistoryStore;
use crate::core::milestone::{Milestone, MilestoneTracker};
use crate::core::store::StateStore;
use crate::source::BootTimeSource;
use crate::utils::tick_debug_enabled;

/// Outcome of one successful tick.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tick {
    pub(crate) elapsed: f64,
    pub(crate) boot_time: DateTime<Utc>,
    pub(crate) crossed: Option<&'static Milestone>,
}

pub(crate) struct UptimeClock<S: BootTimeSource> {
    source: S,
    history: HistoryStore,
    milestones: MilestoneTracker,
    store: StateStore,
    last_elapsed: Option<f64>,
}

impl<S: BootTimeSource> UptimeClock<S> {
    pub(crate) fn new(source: S, store: StateStore) -> Self {
        let state = store.load();
        UptimeClock {
            source,
            history: HistoryStore::from_sessions(state.sessions),
            milestones: MilestoneTracker::new(state.watermark),
            store,
            last_elapsed: None,
        }
    }

    pub(crate) fn tick(&mut self) -> Option<Tick> {
        self.tick_at(Utc::now())
    }

    /// A failed boot-time read skips the tick; previously published state
    /// stays as-is.
    pub(crate) fn tick_at(&mut self, now: DateTime<Utc>) -> Option<Tick> {
        let boot_time = match self.source.boot_time() {
            Ok(boot_time) => boot_time,
            Err(e) => {
                if tick_debug_enabled() {
                    eprintln!("uptrack: skipping tick: {e}");
                }
                return None;
            }
        };

        let elapsed = ((now - boot_time).num_milliseconds() as f64 / 1000.0).max(0.0);
        self.history.track(boot_time, elapsed, now);
        let crossed = self.milestones.check(elapsed);
        self.store
            .save(self.history.sessions(), self.milestones.watermark());
        self.last_elapsed = Some(elapsed);

        Some(Tick {
            elapsed,
            boot_time,
            crossed,
        })
    }

    pub(crate) fn last_elapsed(&self) -> Option<f64> {
        self.last_elapsed
    }

    pub(crate) fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub(crate) fn clear_history(&mut self) {
        self.history.clear();
        self.store
            .save(self.history.sessions(), self.milestones.watermark());
    }
}

/// Tick interval with the runaway-polling floor applied.
pub(crate) fn clamp_interval(secs: f64) -> Duration {
    Duration::from_secs_f64(secs.max(MIN_INTERVAL_SECS))
}
