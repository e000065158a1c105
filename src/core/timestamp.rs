//! Timestamp formatting utilities

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format options for log output.
///
/// The default is RFC 3339 with nanosecond precision in UTC, e.g.
/// `2025-01-08T10:30:45.123456789Z`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 UTC with nanoseconds: `2025-01-08T10:30:45.123456789Z`
    #[default]
    Rfc3339Nano,

    /// RFC 3339 UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Rfc3339Millis,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format string
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339Nano => {
                datetime.to_rfc3339_opts(SecondsFormat::Nanos, true)
            }
            TimestampFormat::Rfc3339Millis => {
                datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
            }
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Format the current time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456789 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::nanoseconds(123_456_789)
    }

    #[test]
    fn test_rfc3339_nano_format() {
        let format = TimestampFormat::Rfc3339Nano;
        let result = format.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456789Z");
    }

    #[test]
    fn test_rfc3339_millis_format() {
        let format = TimestampFormat::Rfc3339Millis;
        let result = format.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_unix_millis_format() {
        let format = TimestampFormat::UnixMillis;
        let result = format.format(&fixed_datetime());
        let parsed: i64 = result.parse().expect("valid unix millis timestamp");
        assert_eq!(parsed, fixed_datetime().timestamp_millis());
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        let result = format.format(&fixed_datetime());
        assert_eq!(result, "2025/01/08 10:30");
    }

    #[test]
    fn test_default_is_rfc3339_nano() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Rfc3339Nano);
    }

    #[test]
    fn test_now_is_utc() {
        let result = TimestampFormat::Rfc3339Nano.now();
        assert!(result.ends_with('Z'));
        assert!(result.contains('T'));
    }
}
