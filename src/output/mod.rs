mod csv;
mod format;
mod json;
mod markdown;
mod table;

pub(crate) use csv::export_history_csv;
pub(crate) use json::{
    export_history_json, milestones_json, stats_json, status_json, status_json_line,
};
pub(crate) use markdown::export_history_markdown;
pub(crate) use table::{
    HistoryTableOptions, print_history_table, print_milestones_table, print_stats_table,
};
