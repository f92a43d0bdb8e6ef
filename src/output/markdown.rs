use std::fmt::Write;

use crate::consts::CURRENT_LABEL;
use crate::core::Session;
use crate::utils::iso8601;

/// Full history as a markdown table, newest boot first.
pub(crate) fn export_history_markdown(sessions: &[Session]) -> String {
    let mut sorted: Vec<_> = sessions.iter().collect();
    sorted.sort_by(|a, b| b.boot_time.cmp(&a.boot_time));

    let mut out = String::from("| Boot Date | End Date | Duration | Status |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for session in &sorted {
        let end_date = session
            .end_time
            .map(iso8601)
            .unwrap_or_else(|| CURRENT_LABEL.to_string());
        let status = if session.is_current {
            "🟢 Current"
        } else {
            "Completed"
        };
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            iso8601(session.boot_time),
            end_date,
            session.formatted_duration(),
            status,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().expect("test timestamp")
    }

    #[test]
    fn header_and_separator_rows() {
        let md = export_history_markdown(&[]);
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[0], "| Boot Date | End Date | Duration | Status |");
        assert_eq!(lines[1], "| --- | --- | --- | --- |");
    }

    #[test]
    fn current_session_status_tag() {
        let session = Session {
            id: Uuid::new_v4(),
            boot_time: ts("2026-02-01T08:00:00Z"),
            end_time: None,
            duration: 3600.0,
            is_current: true,
        };
        let md = export_history_markdown(&[session]);
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(
            lines[2],
            "| 2026-02-01T08:00:00Z | Current | 01h 00m | 🟢 Current |"
        );
    }

    #[test]
    fn completed_session_status_tag() {
        let session = Session {
            id: Uuid::new_v4(),
            boot_time: ts("2026-01-01T00:00:00Z"),
            end_time: Some(ts("2026-01-02T00:00:00Z")),
            duration: 86400.0,
            is_current: false,
        };
        let md = export_history_markdown(&[session]);
        assert!(md.lines().nth(2).unwrap().ends_with("| Completed |"));
    }
}
