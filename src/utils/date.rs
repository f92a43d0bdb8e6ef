use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 timestamp with a trailing `Z`, the wire form used by exports:
/// "2026-02-12T10:00:00Z"
pub(crate) fn iso8601(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso8601_uses_z_suffix() {
        let dt = "2026-02-12T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(iso8601(dt), "2026-02-12T10:00:00Z");
    }

    #[test]
    fn iso8601_drops_subseconds() {
        let dt = "2026-02-12T10:00:00.987Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(iso8601(dt), "2026-02-12T10:00:00Z");
    }
}
