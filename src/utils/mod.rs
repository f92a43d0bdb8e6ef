mod date;
mod debug;
mod timezone;

pub(crate) use date::iso8601;
pub(crate) use debug::{set_tick_debug, tick_debug_enabled};
pub(crate) use timezone::Timezone;
