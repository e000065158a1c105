//! Main logger implementation

use super::{
    context::Context,
    format::{FormatFn, LogFormat},
    severity::Severity,
    sink::{SharedSink, Sink},
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use std::sync::Arc;

/// A leveled, structured logger.
///
/// Binds a minimum severity, a format choice, a prefix, and an ordered list
/// of sinks. Configuration is immutable after construction and every call is
/// a pure function of its arguments plus that fixed configuration, so a
/// `Logger` is safe to share and invoke concurrently without locking.
///
/// Dispatch is fully synchronous: the severity check happens first (the only
/// short-circuit), the line is formatted once, and every sink is invoked in
/// registration order with the same formatted string and the original level.
///
/// # Example
/// ```
/// use logz::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Severity::Debug)
///     .format(LogFormat::Json)
///     .prefix("my-app")
///     .build();
///
/// logger.info("server started");
/// logger.error_with_context(
///     "request failed",
///     Context::new().with_field("code", 500),
/// );
/// ```
pub struct Logger {
    min_level: Severity,
    format: LogFormat,
    format_fn: Option<FormatFn>,
    prefix: String,
    timestamp_format: TimestampFormat,
    sinks: Vec<SharedSink>,
}

impl Logger {
    /// Create a logger with all defaults: Info threshold, text format, no
    /// prefix, and the default console sink.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The configured minimum severity
    #[must_use]
    pub fn min_level(&self) -> Severity {
        self.min_level
    }

    /// The configured prefix (empty when unset)
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Log a message at the given severity with no context
    pub fn log(&self, level: Severity, message: impl Into<String>) {
        self.log_with_context(level, message, Context::new());
    }

    /// Log a message at the given severity with structured context.
    ///
    /// Returns immediately when the severity does not pass the threshold:
    /// no formatting and no I/O happen for filtered-out calls.
    pub fn log_with_context(&self, level: Severity, message: impl Into<String>, context: Context) {
        if !level.should_emit(self.min_level) {
            return;
        }

        let message = message.into();
        let line = match &self.format_fn {
            Some(format_fn) => format_fn(level, &message, &context),
            None => self.format.format(
                level,
                &message,
                &context,
                &self.prefix,
                &self.timestamp_format,
            ),
        };

        for sink in &self.sinks {
            sink.write(level, &line);
        }
    }

    #[inline]
    pub fn emergency(&self, message: impl Into<String>) {
        self.log(Severity::Emergency, message);
    }

    #[inline]
    pub fn alert(&self, message: impl Into<String>) {
        self.log(Severity::Alert, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(Severity::Critical, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    #[inline]
    pub fn notice(&self, message: impl Into<String>) {
        self.log(Severity::Notice, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    pub fn emergency_with_context(&self, message: impl Into<String>, context: Context) {
        self.log_with_context(Severity::Emergency, message, context);
    }

    #[inline]
    pub fn alert_with_context(&self, message: impl Into<String>, context: Context) {
        self.log_with_context(Severity::Alert, message, context);
    }

    #[inline]
    pub fn critical_with_context(&self, message: impl Into<String>, context: Context) {
        self.log_with_context(Severity::Critical, message, context);
    }

    #[inline]
    pub fn error_with_context(&self, message: impl Into<String>, context: Context) {
        self.log_with_context(Severity::Error, message, context);
    }

    #[inline]
    pub fn warning_with_context(&self, message: impl Into<String>, context: Context) {
        self.log_with_context(Severity::Warning, message, context);
    }

    #[inline]
    pub fn notice_with_context(&self, message: impl Into<String>, context: Context) {
        self.log_with_context(Severity::Notice, message, context);
    }

    #[inline]
    pub fn info_with_context(&self, message: impl Into<String>, context: Context) {
        self.log_with_context(Severity::Info, message, context);
    }

    #[inline]
    pub fn debug_with_context(&self, message: impl Into<String>, context: Context) {
        self.log_with_context(Severity::Debug, message, context);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Defaults applied at `build()`: unset level is `Info`, unset format is
/// `Text`, an empty sink list becomes a single [`ConsoleSink`].
///
/// # Example
/// ```
/// use logz::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Severity::Warning)
///     .prefix("svc")
///     .sink(ConsoleSink::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: Severity,
    format: LogFormat,
    format_fn: Option<FormatFn>,
    prefix: String,
    timestamp_format: TimestampFormat,
    sinks: Vec<SharedSink>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: Severity::Info,
            format: LogFormat::Text,
            format_fn: None,
            prefix: String::new(),
            timestamp_format: TimestampFormat::default(),
            sinks: Vec::new(),
        }
    }

    /// Set the minimum severity; less severe messages are dropped
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    /// Set the built-in output format (text or JSON)
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set a custom formatter callback.
    ///
    /// When present it fully replaces the built-in text/JSON modes and
    /// receives the raw context map (empty if the caller passed none).
    #[must_use = "builder methods return a new value"]
    pub fn format_fn<F>(mut self, format_fn: F) -> Self
    where
        F: Fn(Severity, &str, &Context) -> String + Send + Sync + 'static,
    {
        self.format_fn = Some(Arc::new(format_fn));
        self
    }

    /// Set the prefix string prepended to every formatted line
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the timestamp format
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Add a sink; sinks are invoked in registration order
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Add an already-shared sink
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: SharedSink) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Add a closure sink
    #[must_use = "builder methods return a new value"]
    pub fn sink_fn<F>(self, sink: F) -> Self
    where
        F: Fn(Severity, &str) + Send + Sync + 'static,
    {
        self.sink(sink)
    }

    /// Build the Logger, applying defaults for anything unset
    pub fn build(mut self) -> Logger {
        if self.sinks.is_empty() {
            self.sinks.push(Arc::new(ConsoleSink::new()));
        }

        Logger {
            min_level: self.min_level,
            format: self.format,
            format_fn: self.format_fn,
            prefix: self.prefix,
            timestamp_format: self.timestamp_format,
            sinks: self.sinks,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn capture_sink() -> (SharedSink, Arc<Mutex<Vec<(Severity, String)>>>) {
        let captured: Arc<Mutex<Vec<(Severity, String)>>> = Arc::new(Mutex::new(Vec::new()));
        let captured_clone = Arc::clone(&captured);
        let sink: SharedSink = Arc::new(move |level: Severity, line: &str| {
            captured_clone.lock().push((level, line.to_string()));
        });
        (sink, captured)
    }

    #[test]
    fn test_defaults() {
        let logger = Logger::builder().build();
        assert_eq!(logger.min_level(), Severity::Info);
        assert_eq!(logger.prefix(), "");
    }

    #[test]
    fn test_threshold_short_circuit() {
        let (sink, captured) = capture_sink();
        let logger = Logger::builder()
            .min_level(Severity::Error)
            .shared_sink(sink)
            .build();

        logger.debug("dropped");
        logger.info("dropped");
        logger.error("kept");
        logger.emergency("kept");

        let lines = captured.lock();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].1.ends_with("kept"));
        assert_eq!(lines[0].0, Severity::Error);
        assert_eq!(lines[1].0, Severity::Emergency);
    }

    #[test]
    fn test_text_line_contains_prefix_level_message() {
        let (sink, captured) = capture_sink();
        let logger = Logger::builder()
            .min_level(Severity::Debug)
            .prefix("test")
            .shared_sink(sink)
            .build();

        logger.info("test message");

        let lines = captured.lock();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].1.starts_with("[test] ["));
        assert!(lines[0].1.contains("[INFO]"));
        assert!(lines[0].1.ends_with("test message"));
    }

    #[test]
    fn test_json_format_dispatch() {
        let (sink, captured) = capture_sink();
        let logger = Logger::builder()
            .format(LogFormat::Json)
            .prefix("test")
            .shared_sink(sink)
            .build();

        logger.info_with_context("test message", Context::new().with_field("key", "value"));

        let lines = captured.lock();
        let parsed: serde_json::Value = serde_json::from_str(&lines[0].1).unwrap();
        assert_eq!(parsed["message"], "test message");
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["prefix"], "test");
        assert_eq!(parsed["key"], "value");
    }

    #[test]
    fn test_custom_format_fn_replaces_builtins() {
        let (sink, captured) = capture_sink();
        let logger = Logger::builder()
            .format(LogFormat::Json)
            .format_fn(|level, message, _context| format!("CUSTOM {}: {}", level, message))
            .shared_sink(sink)
            .build();

        logger.info("test message");

        let lines = captured.lock();
        assert_eq!(lines[0].1, "CUSTOM INFO: test message");
    }

    #[test]
    fn test_custom_format_fn_receives_empty_context() {
        let (sink, captured) = capture_sink();
        let logger = Logger::builder()
            .format_fn(|_level, _message, context| format!("fields={}", context.len()))
            .shared_sink(sink)
            .build();

        logger.info("no context");

        let lines = captured.lock();
        assert_eq!(lines[0].1, "fields=0");
    }

    #[test]
    fn test_sinks_invoked_in_order() {
        let (first, first_lines) = capture_sink();
        let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        let order_a = Arc::clone(&order);
        let order_b = Arc::clone(&order);
        let logger = Logger::builder()
            .sink_fn(move |_level, _line| order_a.lock().push("a"))
            .shared_sink(first)
            .sink_fn(move |_level, _line| order_b.lock().push("b"))
            .build();

        logger.notice("fan out");

        assert_eq!(*order.lock(), vec!["a", "b"]);
        assert_eq!(first_lines.lock().len(), 1);
    }

    #[test]
    fn test_all_convenience_levels() {
        let (sink, captured) = capture_sink();
        let logger = Logger::builder()
            .min_level(Severity::Debug)
            .shared_sink(sink)
            .build();

        logger.emergency("m");
        logger.alert("m");
        logger.critical("m");
        logger.error("m");
        logger.warning("m");
        logger.notice("m");
        logger.info("m");
        logger.debug("m");

        let levels: Vec<Severity> = captured.lock().iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, Severity::ALL);
    }

    #[test]
    fn test_concurrent_logging() {
        let (sink, captured) = capture_sink();
        let logger = Arc::new(
            Logger::builder()
                .min_level(Severity::Debug)
                .shared_sink(sink)
                .build(),
        );

        let mut handles = Vec::new();
        for t in 0..4 {
            let logger = Arc::clone(&logger);
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    logger.info(format!("thread {} message {}", t, i));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(captured.lock().len(), 100);
    }
}
