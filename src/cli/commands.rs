//! CLI subcommand definitions

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show current uptime (default)
    Status,
    /// Print uptime continuously at the tick interval
    Watch {
        /// Stop after this many ticks (0 = run until interrupted)
        #[arg(long, default_value_t = 0)]
        count: u64,
    },
    /// Show the boot session history
    History,
    /// Show session statistics (longest, average, total)
    Stats,
    /// Export the session history
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Remove all completed sessions from history
    Clear,
    /// List uptime milestones and whether they are reached
    Milestones,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ExportFormat {
    /// Comma-separated values
    #[default]
    Csv,
    /// Structured JSON
    Json,
    /// Markdown table
    Markdown,
}
