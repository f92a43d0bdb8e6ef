use std::fmt::Write;

use crate::consts::CURRENT_LABEL;
use crate::core::Session;
use crate::utils::iso8601;

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Full history as CSV, newest boot first. The open session's end date is
/// the literal `Current`.
pub(crate) fn export_history_csv(sessions: &[Session]) -> String {
    let mut sorted: Vec<_> = sessions.iter().collect();
    sorted.sort_by(|a, b| b.boot_time.cmp(&a.boot_time));

    let mut out = String::from("Boot Date,End Date,Duration (seconds),Duration (formatted),Status\n");
    for session in &sorted {
        let end_date = session
            .end_time
            .map(iso8601)
            .unwrap_or_else(|| CURRENT_LABEL.to_string());
        let status = if session.is_current {
            CURRENT_LABEL
        } else {
            "Completed"
        };
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            csv_escape(&iso8601(session.boot_time)),
            csv_escape(&end_date),
            session.duration,
            csv_escape(&session.formatted_duration()),
            status,
        );
    }
    out
}
