use std::ops::ControlFlow;
use std::path::Path;

use crate::cli::{Cli, Commands, ExportFormat};
use crate::core::{StateStore, Ticker, UptimeClock, clamp_interval, format_duration};
use crate::error::AppError;
use crate::notify::{NotificationSink, NullSink, TerminalSink};
use crate::output::{
    HistoryTableOptions, export_history_csv, export_history_json, export_history_markdown,
    milestones_json, print_history_table, print_milestones_table, print_stats_table, stats_json,
    status_json, status_json_line,
};
use crate::source::SystemBootTime;
use crate::utils::Timezone;

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let mut clock = UptimeClock::new(SystemBootTime, StateStore::at_default_path());

    match &cli.command {
        None | Some(Commands::Status) => handle_status(&mut clock, cli, timezone),
        Some(Commands::Watch { count }) => handle_watch(&mut clock, cli, *count),
        Some(Commands::History) => handle_history(&mut clock, cli, timezone),
        Some(Commands::Stats) => handle_stats(&mut clock, cli),
        Some(Commands::Export { format, output }) => {
            handle_export(&mut clock, *format, output.as_deref())
        }
        Some(Commands::Clear) => handle_clear(&mut clock),
        Some(Commands::Milestones) => handle_milestones(&mut clock, cli),
    }
}

fn sink_for(cli: &Cli) -> Box<dyn NotificationSink> {
    if cli.milestones_enabled() {
        Box::new(TerminalSink)
    } else {
        Box::new(NullSink)
    }
}

fn handle_status(
    clock: &mut UptimeClock<SystemBootTime>,
    cli: &Cli,
    timezone: Timezone,
) -> Result<(), AppError> {
    let Some(tick) = clock.tick() else {
        return Err(AppError::BootTimeUnavailable {
            reason: "boot time read failed (rerun with --debug for details)".to_string(),
        });
    };

    let formatted = format_duration(tick.elapsed, cli.style(), &cli.format_options(false));
    if cli.json {
        println!("{}", status_json(&tick, &formatted));
    } else {
        println!("Uptime: {formatted}");
        println!("Booted: {}", timezone.format_datetime(tick.boot_time));
        if let Some(milestone) = tick.crossed {
            sink_for(cli).notify(milestone);
        }
    }
    Ok(())
}

fn handle_watch(
    clock: &mut UptimeClock<SystemBootTime>,
    cli: &Cli,
    count: u64,
) -> Result<(), AppError> {
    let interval = clamp_interval(cli.interval_secs());
    let style = cli.style();
    let opts = cli.format_options(true);
    let mut sink = sink_for(cli);

    let ticker = Ticker::new();
    let handle = ticker.handle();
    let mut remaining = count;
    ticker.run(interval, || {
        if let Some(tick) = clock.tick() {
            let line = format_duration(tick.elapsed, style, &opts);
            if cli.json {
                println!("{}", status_json_line(&tick, &line));
            } else {
                println!("{line}");
            }
            if let Some(milestone) = tick.crossed {
                sink.notify(milestone);
            }
        }
        if count > 0 {
            remaining -= 1;
            if remaining == 0 {
                handle.stop();
            }
        }
        ControlFlow::Continue(())
    });
    Ok(())
}

fn handle_history(
    clock: &mut UptimeClock<SystemBootTime>,
    cli: &Cli,
    timezone: Timezone,
) -> Result<(), AppError> {
    clock.tick();
    if clock.history().is_empty() {
        println!("No sessions recorded yet.");
        return Ok(());
    }
    if cli.json {
        println!("{}", export_history_json(clock.history().sessions()));
    } else {
        print_history_table(
            clock.history().sessions(),
            HistoryTableOptions {
                order: cli.order,
                use_color: cli.use_color(),
                timezone,
            },
        );
    }
    Ok(())
}

fn handle_stats(clock: &mut UptimeClock<SystemBootTime>, cli: &Cli) -> Result<(), AppError> {
    clock.tick();
    if cli.json {
        println!("{}", stats_json(clock.history()));
    } else {
        print_stats_table(clock.history(), cli.use_color());
    }
    Ok(())
}

fn handle_export(
    clock: &mut UptimeClock<SystemBootTime>,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<(), AppError> {
    clock.tick();
    let sessions = clock.history().sessions();
    let content = match format {
        ExportFormat::Csv => export_history_csv(sessions),
        ExportFormat::Json => export_history_json(sessions),
        ExportFormat::Markdown => export_history_markdown(sessions),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &content).map_err(AppError::ExportWrite)?;
            println!("Exported {} sessions to {}", sessions.len(), path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn handle_clear(clock: &mut UptimeClock<SystemBootTime>) -> Result<(), AppError> {
    clock.clear_history();
    println!("History cleared; the current session is kept.");
    Ok(())
}

fn handle_milestones(
    clock: &mut UptimeClock<SystemBootTime>,
    cli: &Cli,
) -> Result<(), AppError> {
    clock.tick();
    let elapsed = clock
        .last_elapsed()
        .or_else(|| clock.history().current().map(|s| s.duration))
        .unwrap_or(0.0);
    if cli.json {
        println!("{}", milestones_json(elapsed));
    } else {
        print_milestones_table(elapsed, cli.use_color());
    }
    Ok(())
}
