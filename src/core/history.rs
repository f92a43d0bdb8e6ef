//! Boot session history
//!
//! Ordered list of sessions, capped at [`HISTORY_CAPACITY`] entries. Exactly
//! one session may be current at a time; it is refreshed in place on every
//! tick and closed only when a materially different boot time shows up.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{BOOT_TIME_TOLERANCE_SECS, HISTORY_CAPACITY};
use crate::core::format::format_session_duration;

/// One contiguous run of the monitored machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Session {
    pub(crate) id: Uuid,
    pub(crate) boot_time: DateTime<Utc>,
    /// Absent while the session is current.
    pub(crate) end_time: Option<DateTime<Utc>>,
    /// Seconds. Frozen at closure; refreshed every tick while current.
    pub(crate) duration: f64,
    pub(crate) is_current: bool,
}

impl Session {
    pub(crate) fn formatted_duration(&self) -> String {
        format_session_duration(self.duration)
    }
}

#[derive(Debug, Default)]
pub(crate) struct HistoryStore {
    sessions: Vec<Session>,
    last_boot_time: Option<DateTime<Utc>>,
}

impl HistoryStore {
    pub(crate) fn from_sessions(sessions: Vec<Session>) -> Self {
        let last_boot_time = sessions
            .iter()
            .find(|s| s.is_current)
            .map(|s| s.boot_time);
        HistoryStore {
            sessions,
            last_boot_time,
        }
    }

    pub(crate) fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub(crate) fn current(&self) -> Option<&Session> {
        self.sessions.iter().find(|s| s.is_current)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Record the observed boot time. A reading more than
    /// [`BOOT_TIME_TOLERANCE_SECS`] away from the previous one is a new boot
    /// event: the old current session is closed and appended to history,
    /// then the current session is refreshed with the new reading.
    pub(crate) fn track(
        &mut self,
        boot_time: DateTime<Utc>,
        current_elapsed: f64,
        now: DateTime<Utc>,
    ) {
        if let Some(last) = self.last_boot_time {
            let drift = (boot_time - last).num_milliseconds().abs() as f64 / 1000.0;
            if drift > BOOT_TIME_TOLERANCE_SECS {
                let closed = Session {
                    id: Uuid::new_v4(),
                    boot_time: last,
                    end_time: Some(now),
                    duration: (now - last).num_milliseconds() as f64 / 1000.0,
                    is_current: false,
                };
                self.sessions.retain(|s| !s.is_current);
                self.push_capped(closed);
            }
        }

        self.last_boot_time = Some(boot_time);
        self.sessions.retain(|s| !s.is_current);
        self.push_capped(Session {
            id: Uuid::new_v4(),
            boot_time,
            end_time: None,
            duration: current_elapsed,
            is_current: true,
        });
    }

    fn push_capped(&mut self, session: Session) {
        self.sessions.push(session);
        if self.sessions.len() > HISTORY_CAPACITY {
            let excess = self.sessions.len() - HISTORY_CAPACITY;
            self.sessions.drain(..excess);
        }
    }

    /// Longest session by duration; ties keep the first one encountered.
    pub(crate) fn longest(&self) -> Option<&Session> {
        self.sessions.iter().fold(None, |best, s| match best {
            Some(b) if s.duration > b.duration => Some(s),
            None => Some(s),
            _ => best,
        })
    }

    /// Arithmetic mean of all durations, 0 if empty.
    pub(crate) fn average(&self) -> f64 {
        if self.sessions.is_empty() {
            return 0.0;
        }
        self.total() / self.sessions.len() as f64
    }

    /// Sum of all durations.
    pub(crate) fn total(&self) -> f64 {
        self.sessions.iter().map(|s| s.duration).sum()
    }

    /// Drop all closed sessions. The current session is never removable.
    pub(crate) fn clear(&mut self) {
        self.sessions.retain(|s| s.is_current);
    }
}
