//! Milestone notification sinks
//!
//! The clock only reports which milestone was crossed; delivering the
//! notification is the sink's job, so the core stays testable without any
//! notification subsystem.

use crate::core::Milestone;

pub(crate) trait NotificationSink {
    fn notify(&mut self, milestone: &Milestone);
}

/// Prints the milestone line to stdout.
#[derive(Debug, Default)]
pub(crate) struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&mut self, milestone: &Milestone) {
        println!("🏆 Milestone reached: {} of uptime", milestone.label);
    }
}

/// Discards notifications (milestones disabled).
#[derive(Debug, Default)]
pub(crate) struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _milestone: &Milestone) {}
}
