//! Boot-time sources
//!
//! The clock reads boot time through this seam so the OS dependency stays
//! swappable in tests.

mod system;

use chrono::{DateTime, Utc};

use crate::error::AppError;

pub(crate) use system::SystemBootTime;

pub(crate) trait BootTimeSource {
    fn boot_time(&self) -> Result<DateTime<Utc>, AppError>;
}

/// Fixed boot time for unit tests.
#[cfg(test)]
pub(crate) struct FixedBootTime(pub(crate) DateTime<Utc>);

#[cfg(test)]
impl BootTimeSource for FixedBootTime {
    fn boot_time(&self) -> Result<DateTime<Utc>, AppError> {
        Ok(self.0)
    }
}
