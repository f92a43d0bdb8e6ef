//! Uptime display formatting
//!
//! Pure string rendering of an elapsed-seconds value. Callers guarantee
//! `elapsed >= 0`.

use std::fmt::Write;

/// Display style for elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum FormatStyle {
    /// Show the largest non-zero unit and everything below it
    #[default]
    Automatic,
    /// Always render days, even when zero
    AlwaysShowDays,
    /// Collapse days into total hours
    AlwaysShowHours,
    /// Automatic unit selection with no separators between groups
    Compact,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FormatOptions {
    pub(crate) include_seconds: bool,
    pub(crate) include_minutes: bool,
    /// Caller renders into a fixed-width compact surface (menubar line).
    /// Affects the leading space and, without `force_spaces`, separators.
    pub(crate) compact_display: bool,
    /// Keep separators even in compact display mode. The Compact style
    /// never has separators and ignores this.
    pub(crate) force_spaces: bool,
    /// Prefix the up-arrow glyph.
    pub(crate) arrow: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            include_seconds: false,
            include_minutes: true,
            compact_display: false,
            force_spaces: true,
            arrow: false,
        }
    }
}

/// Format elapsed seconds per the selected style.
///
/// Every numeric field except the leading days unit is zero-padded to two
/// digits. The arrow glyph carries a leading space; without an arrow a
/// single leading space is still emitted for compact-display callers so the
/// rendered width stays aligned.
pub(crate) fn format_duration(elapsed: f64, style: FormatStyle, opts: &FormatOptions) -> String {
    let total = elapsed as i64;
    let days = total / 86400;
    let hours = (total % 86400) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let sep = if style == FormatStyle::Compact {
        ""
    } else if opts.compact_display && !opts.force_spaces {
        ""
    } else {
        " "
    };
    let prefix = if opts.arrow {
        " ↑"
    } else if opts.compact_display {
        " "
    } else {
        ""
    };

    let mut parts: Vec<String> = Vec::with_capacity(4);
    match style {
        FormatStyle::Automatic | FormatStyle::Compact => {
            if days > 0 {
                parts.push(format!("{days}d"));
                parts.push(format!("{hours:02}h"));
                if opts.include_minutes {
                    parts.push(format!("{minutes:02}m"));
                }
            } else if hours > 0 {
                parts.push(format!("{hours:02}h"));
                if opts.include_minutes {
                    parts.push(format!("{minutes:02}m"));
                }
            } else {
                parts.push(format!("{minutes:02}m"));
            }
            if opts.include_seconds {
                parts.push(format!("{seconds:02}s"));
            }
        }
        FormatStyle::AlwaysShowDays => {
            parts.push(format!("{days}d"));
            parts.push(format!("{hours:02}h"));
            if opts.include_minutes {
                parts.push(format!("{minutes:02}m"));
            }
            if opts.include_seconds {
                parts.push(format!("{seconds:02}s"));
            }
        }
        FormatStyle::AlwaysShowHours => {
            let total_hours = days * 24 + hours;
            parts.push(format!("{total_hours:02}h"));
            if opts.include_minutes {
                parts.push(format!("{minutes:02}m"));
            }
            if opts.include_seconds {
                parts.push(format!("{seconds:02}s"));
            }
        }
    }

    let mut out = String::from(prefix);
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        let _ = write!(out, "{part}");
    }
    out
}

/// Duration as shown in history rows: Automatic style, no seconds.
pub(crate) fn format_session_duration(duration: f64) -> String {
    format_duration(duration, FormatStyle::Automatic, &FormatOptions::default())
}
