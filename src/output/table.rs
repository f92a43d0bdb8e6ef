use comfy_table::Color;

use crate::cli::SortOrder;
use crate::consts::CURRENT_LABEL;
use crate::core::{HistoryStore, MILESTONES, Session, format_session_duration};
use crate::output::format::{create_styled_table, header_cell, right_cell, styled_cell};
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy)]
pub(crate) struct HistoryTableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
    pub(crate) timezone: Timezone,
}

pub(crate) fn print_history_table(sessions: &[Session], opts: HistoryTableOptions) {
    let mut sorted: Vec<_> = sessions.iter().collect();
    match opts.order {
        SortOrder::Asc => sorted.sort_by(|a, b| a.boot_time.cmp(&b.boot_time)),
        SortOrder::Desc => sorted.sort_by(|a, b| b.boot_time.cmp(&a.boot_time)),
    }

    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Boot Date", c),
        header_cell("End Date", c),
        header_cell("Duration", c),
        header_cell("Status", c),
    ]);

    let current_color = if c { Some(Color::Green) } else { None };
    for session in &sorted {
        let end_date = match session.end_time {
            Some(end) => opts.timezone.format_datetime(end),
            None => CURRENT_LABEL.to_string(),
        };
        let status = if session.is_current {
            styled_cell(CURRENT_LABEL, current_color, true)
        } else {
            styled_cell("Completed", None, false)
        };
        table.add_row(vec![
            styled_cell(&opts.timezone.format_datetime(session.boot_time), None, false),
            styled_cell(&end_date, None, false),
            right_cell(&session.formatted_duration()),
            status,
        ]);
    }

    println!("{table}");
}

pub(crate) fn print_stats_table(history: &HistoryStore, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Metric", use_color),
        header_cell("Value", use_color),
    ]);

    let longest = history
        .longest()
        .map(|s| s.formatted_duration())
        .unwrap_or_else(|| "—".to_string());

    table.add_row(vec![
        styled_cell("Sessions", None, false),
        right_cell(&history.sessions().len().to_string()),
    ]);
    table.add_row(vec![
        styled_cell("Longest session", None, false),
        right_cell(&longest),
    ]);
    table.add_row(vec![
        styled_cell("Average session", None, false),
        right_cell(&format_session_duration(history.average())),
    ]);
    table.add_row(vec![
        styled_cell("Total uptime", None, false),
        right_cell(&format_session_duration(history.total())),
    ]);

    println!("{table}");
}

pub(crate) fn print_milestones_table(elapsed: f64, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Milestone", use_color),
        header_cell("Threshold", use_color),
        header_cell("Status", use_color),
    ]);

    let reached_color = if use_color { Some(Color::Green) } else { None };
    for milestone in &MILESTONES {
        let reached = elapsed >= milestone.threshold as f64;
        let status = if reached {
            styled_cell("Reached", reached_color, true)
        } else {
            styled_cell("Pending", None, false)
        };
        table.add_row(vec![
            styled_cell(milestone.label, None, false),
            right_cell(&milestone.formatted_threshold()),
            status,
        ]);
    }

    println!("{table}");
}
