use crate::consts::CURRENT_LABEL;
use crate::core::{HistoryStore, MILESTONES, Session, Tick, format_session_duration};
use crate::utils::iso8601;

/// Structured export: array of session objects, newest boot first.
pub(crate) fn export_history_json(sessions: &[Session]) -> String {
    let mut sorted: Vec<_> = sessions.iter().collect();
    sorted.sort_by(|a, b| b.boot_time.cmp(&a.boot_time));

    let output: Vec<serde_json::Value> = sorted
        .iter()
        .map(|session| {
            serde_json::json!({
                "id": session.id,
                "bootDate": iso8601(session.boot_time),
                "endDate": session
                    .end_time
                    .map(iso8601)
                    .unwrap_or_else(|| CURRENT_LABEL.to_string()),
                "duration": session.duration,
                "formattedDuration": session.formatted_duration(),
                "isCurrentSession": session.is_current,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string())
}

pub(crate) fn status_json(tick: &Tick, formatted: &str) -> String {
    let value = serde_json::json!({
        "elapsed": tick.elapsed,
        "formatted": formatted,
        "bootDate": iso8601(tick.boot_time),
        "milestoneCrossed": tick.crossed.map(|m| m.label),
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

/// Single-line variant for per-tick output in watch mode.
pub(crate) fn status_json_line(tick: &Tick, formatted: &str) -> String {
    let value = serde_json::json!({
        "elapsed": tick.elapsed,
        "formatted": formatted,
        "bootDate": iso8601(tick.boot_time),
        "milestoneCrossed": tick.crossed.map(|m| m.label),
    });
    value.to_string()
}

pub(crate) fn stats_json(history: &HistoryStore) -> String {
    let longest = history.longest();
    let value = serde_json::json!({
        "sessions": history.sessions().len(),
        "longestSeconds": longest.map(|s| s.duration),
        "longestFormatted": longest.map(|s| s.formatted_duration()),
        "averageSeconds": history.average(),
        "averageFormatted": format_session_duration(history.average()),
        "totalSeconds": history.total(),
        "totalFormatted": format_session_duration(history.total()),
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

pub(crate) fn milestones_json(elapsed: f64) -> String {
    let output: Vec<serde_json::Value> = MILESTONES
        .iter()
        .map(|m| {
            serde_json::json!({
                "label": m.label,
                "thresholdSeconds": m.threshold,
                "reached": elapsed >= m.threshold as f64,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string())
}
