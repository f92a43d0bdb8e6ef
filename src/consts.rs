/// Maximum number of sessions kept in history; oldest entries are evicted
/// first when the store grows past this.
pub(crate) const HISTORY_CAPACITY: usize = 50;

/// Boot-time readings can jitter between ticks (clock drift, read timing).
/// Two readings within this many seconds are treated as the same boot.
pub(crate) const BOOT_TIME_TOLERANCE_SECS: f64 = 60.0;

/// Floor for the tick interval to prevent runaway polling.
pub(crate) const MIN_INTERVAL_SECS: f64 = 0.5;

/// Default tick interval when neither CLI nor config specifies one.
pub(crate) const DEFAULT_INTERVAL_SECS: f64 = 1.0;

/// Literal end-date value for the open session in exports.
pub(crate) const CURRENT_LABEL: &str = "Current";
