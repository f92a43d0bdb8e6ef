mod args;
mod commands;

pub(crate) use args::{Cli, SortOrder};
pub(crate) use commands::{Commands, ExportFormat};
