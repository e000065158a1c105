//! Built-in output formats for log lines
//!
//! Two built-in modes:
//! - `Text`: bracketed, space-joined segments ending with the raw message
//! - `Json`: one JSON object per line with context merged at the top level
//!
//! A caller-supplied [`FormatFn`] replaces both modes entirely; see
//! [`crate::core::Logger`].

use super::context::Context;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use chrono::Utc;
use std::sync::Arc;

/// Custom formatter callback.
///
/// Receives the severity, the raw message, and the raw context map (empty if
/// the caller passed none). Its return value goes to the sinks verbatim.
pub type FormatFn = Arc<dyn Fn(Severity, &str, &Context) -> String + Send + Sync>;

/// Built-in output format for log lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Text format (default)
    ///
    /// Example: `[svc] [2025-01-08T10:30:45.123456789Z] [ERROR] {"code":500} boom`
    ///
    /// The prefix segment is omitted when the prefix is empty; the context
    /// segment is omitted when the context is empty.
    #[default]
    Text,

    /// Single-line JSON object
    ///
    /// Fixed keys `timestamp`, `level`, `message`, and `prefix` (omitted if
    /// empty), with every context key merged at the top level. A context key
    /// that collides with a fixed key shadows it; last write wins.
    Json,
}

impl LogFormat {
    /// Format a log line. Pure string construction; serialization failures
    /// are swallowed and produce best-effort output, never an error.
    pub fn format(
        &self,
        level: Severity,
        message: &str,
        context: &Context,
        prefix: &str,
        timestamp_format: &TimestampFormat,
    ) -> String {
        match self {
            LogFormat::Text => self.format_text(level, message, context, prefix, timestamp_format),
            LogFormat::Json => self.format_json(level, message, context, prefix, timestamp_format),
        }
    }

    fn format_text(
        &self,
        level: Severity,
        message: &str,
        context: &Context,
        prefix: &str,
        timestamp_format: &TimestampFormat,
    ) -> String {
        let mut segments: Vec<String> = Vec::with_capacity(4);

        if !prefix.is_empty() {
            segments.push(format!("[{}]", prefix));
        }
        segments.push(format!("[{}]", timestamp_format.now()));
        segments.push(format!("[{}]", level.to_str()));

        if !context.is_empty() {
            if let Some(json) = context.to_json_string() {
                segments.push(json);
            }
        }

        format!("{} {}", segments.join(" "), message)
    }

    fn format_json(
        &self,
        level: Severity,
        message: &str,
        context: &Context,
        prefix: &str,
        timestamp_format: &TimestampFormat,
    ) -> String {
        let mut json_obj = serde_json::Map::new();

        let now = Utc::now();
        let timestamp = match timestamp_format {
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(now.timestamp_millis().into())
            }
            _ => serde_json::Value::String(timestamp_format.format(&now)),
        };
        json_obj.insert("timestamp".to_string(), timestamp);

        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(level.to_str().to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(message.to_string()),
        );
        if !prefix.is_empty() {
            json_obj.insert(
                "prefix".to_string(),
                serde_json::Value::String(prefix.to_string()),
            );
        }

        // Context keys merge at the top level and may shadow the fixed keys
        for (key, value) in context.fields() {
            json_obj.insert(key.clone(), value.to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }
}
