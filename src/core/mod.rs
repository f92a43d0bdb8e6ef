mod clock;
mod format;
mod history;
mod milestone;
mod store;
mod ticker;

pub(crate) use clock::{Tick, UptimeClock, clamp_interval};
pub(crate) use format::{FormatOptions, FormatStyle, format_duration, format_session_duration};
pub(crate) use history::{HistoryStore, Session};
pub(crate) use milestone::{MILESTONES, Milestone};
pub(crate) use store::StateStore;
pub(crate) use ticker::Ticker;
