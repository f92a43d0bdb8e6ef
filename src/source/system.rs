use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::source::BootTimeSource;

/// Boot time from the operating system.
///
/// `UPTRACK_BOOT_TIME` (epoch seconds) overrides the OS reading, which keeps
/// integration tests deterministic.
pub(crate) struct SystemBootTime;

impl BootTimeSource for SystemBootTime {
    fn boot_time(&self) -> Result<DateTime<Utc>, AppError> {
        if let Ok(raw) = std::env::var("UPTRACK_BOOT_TIME") {
            return parse_epoch_secs(&raw);
        }
        read_os_boot_time()
    }
}

fn parse_epoch_secs(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let secs: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::BootTimeUnavailable {
            reason: format!("invalid UPTRACK_BOOT_TIME value: {raw:?}"),
        })?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| AppError::BootTimeUnavailable {
        reason: format!("timestamp out of range: {secs}"),
    })
}

#[cfg(target_os = "linux")]
fn read_os_boot_time() -> Result<DateTime<Utc>, AppError> {
    let stat =
        std::fs::read_to_string("/proc/stat").map_err(|e| AppError::BootTimeUnavailable {
            reason: format!("failed to read /proc/stat: {e}"),
        })?;
    for line in stat.lines() {
        if let Some(rest) = line.strip_prefix("btime ") {
            return parse_epoch_secs(rest);
        }
    }
    Err(AppError::BootTimeUnavailable {
        reason: "btime not found in /proc/stat".to_string(),
    })
}

#[cfg(target_os = "macos")]
fn read_os_boot_time() -> Result<DateTime<Utc>, AppError> {
    let output = std::process::Command::new("sysctl")
        .args(["-n", "kern.boottime"])
        .output()
        .map_err(|e| AppError::BootTimeUnavailable {
            reason: format!("failed to run sysctl: {e}"),
        })?;
    if !output.status.success() {
        return Err(AppError::BootTimeUnavailable {
            reason: "sysctl kern.boottime failed".to_string(),
        });
    }
    let raw = String::from_utf8_lossy(&output.stdout);
    parse_kern_boottime(&raw)
}

/// Parse sysctl output of the form `{ sec = 1759786954, usec = 123 } ...`.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn parse_kern_boottime(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let sec_field = raw
        .split("sec =")
        .nth(1)
        .and_then(|rest| rest.split([',', '}']).next())
        .map(str::trim)
        .ok_or_else(|| AppError::BootTimeUnavailable {
            reason: format!("unexpected kern.boottime format: {raw:?}"),
        })?;
    parse_epoch_secs(sec_field)
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn read_os_boot_time() -> Result<DateTime<Utc>, AppError> {
    Err(AppError::BootTimeUnavailable {
        reason: "unsupported platform".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_epoch_secs_valid() {
        let dt = parse_epoch_secs("1759786954").unwrap();
        assert_eq!(dt.timestamp(), 1_759_786_954);
    }

    #[test]
    fn parse_epoch_secs_rejects_garbage() {
        assert!(parse_epoch_secs("soon").is_err());
    }

    #[test]
    fn parse_kern_boottime_extracts_sec() {
        let raw = "{ sec = 1759786954, usec = 361259 } Mon Oct  6 16:02:34 2025";
        let dt = parse_kern_boottime(raw).unwrap();
        assert_eq!(dt.timestamp(), 1_759_786_954);
    }

    #[test]
    fn parse_kern_boottime_rejects_unexpected_shape() {
        assert!(parse_kern_boottime("no fields here").is_err());
    }
}
