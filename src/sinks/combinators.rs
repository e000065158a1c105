//! Composable sink wrappers
//!
//! Combinators wrap other sinks functionally; there is no shared mutable
//! state between them. None of them isolate failures: a panicking inner
//! sink aborts the whole dispatch call.

use crate::core::{Severity, SharedSink, Sink};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Fans every call out to N wrapped sinks, in the given order.
pub struct MultiSink {
    sinks: Vec<SharedSink>,
}

impl MultiSink {
    pub fn new(sinks: Vec<SharedSink>) -> Self {
        Self { sinks }
    }

    /// Builder-style variant for wrapping concrete sink values
    #[must_use]
    pub fn with<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }
}

impl Default for MultiSink {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Sink for MultiSink {
    fn write(&self, level: Severity, line: &str) {
        for sink in &self.sinks {
            sink.write(level, line);
        }
    }
}

/// Wraps one sink with its own severity threshold.
///
/// The inner sink only observes calls at least as severe as the threshold,
/// using the same ordinal rule as the logger itself. This lets different
/// sinks apply independent minimum severities downstream of a single logger.
pub struct LevelFilterSink {
    threshold: Severity,
    inner: SharedSink,
}

impl LevelFilterSink {
    pub fn new<S: Sink + 'static>(threshold: Severity, inner: S) -> Self {
        Self {
            threshold,
            inner: Arc::new(inner),
        }
    }

    pub fn from_shared(threshold: Severity, inner: SharedSink) -> Self {
        Self { threshold, inner }
    }
}

impl Sink for LevelFilterSink {
    fn write(&self, level: Severity, line: &str) {
        if level.should_emit(self.threshold) {
            self.inner.write(level, line);
        }
    }
}

/// Routes by severity between two writers: `Error` and more severe to the
/// first, everything else to the second.
pub struct SplitSink<E: Write + Send, O: Write + Send> {
    error_writer: Mutex<E>,
    other_writer: Mutex<O>,
}

impl<E: Write + Send, O: Write + Send> SplitSink<E, O> {
    pub fn new(error_writer: E, other_writer: O) -> Self {
        Self {
            error_writer: Mutex::new(error_writer),
            other_writer: Mutex::new(other_writer),
        }
    }
}

impl<E: Write + Send, O: Write + Send> Sink for SplitSink<E, O> {
    fn write(&self, level: Severity, line: &str) {
        if level <= Severity::Error {
            let mut writer = self.error_writer.lock();
            let _ = writeln!(writer, "{}", line);
        } else {
            let mut writer = self.other_writer.lock();
            let _ = writeln!(writer, "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture() -> (SharedSink, Arc<Mutex<Vec<(Severity, String)>>>) {
        let captured: Arc<Mutex<Vec<(Severity, String)>>> = Arc::new(Mutex::new(Vec::new()));
        let captured_clone = Arc::clone(&captured);
        let sink: SharedSink = Arc::new(move |level: Severity, line: &str| {
            captured_clone.lock().push((level, line.to_string()));
        });
        (sink, captured)
    }

    #[test]
    fn test_multi_sink_order() {
        let (a, a_lines) = capture();
        let (b, b_lines) = capture();

        let multi = MultiSink::new(vec![a, b]);
        multi.write(Severity::Info, "one");
        multi.write(Severity::Error, "two");

        let a_lines = a_lines.lock();
        let b_lines = b_lines.lock();
        assert_eq!(a_lines.len(), 2);
        assert_eq!(*a_lines, *b_lines);
        assert_eq!(a_lines[0].1, "one");
        assert_eq!(a_lines[1].1, "two");
    }

    #[test]
    fn test_level_filter_blocks_less_severe() {
        let (inner, lines) = capture();
        let filtered = LevelFilterSink::from_shared(Severity::Error, inner);

        filtered.write(Severity::Debug, "dropped");
        filtered.write(Severity::Warning, "dropped");
        filtered.write(Severity::Error, "kept");
        filtered.write(Severity::Emergency, "kept");

        let lines = lines.lock();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|(l, _)| *l <= Severity::Error));
    }

    #[test]
    fn test_split_sink_routes_by_severity() {
        let split = SplitSink::new(Vec::new(), Vec::new());

        split.write(Severity::Error, "to errors");
        split.write(Severity::Critical, "to errors");
        split.write(Severity::Info, "to other");

        let errors = String::from_utf8(split.error_writer.into_inner()).unwrap();
        let other = String::from_utf8(split.other_writer.into_inner()).unwrap();
        assert_eq!(errors, "to errors\nto errors\n");
        assert_eq!(other, "to other\n");
    }

    #[test]
    fn test_nested_combinators() {
        let (inner, lines) = capture();
        let multi = MultiSink::default().with(LevelFilterSink::from_shared(
            Severity::Warning,
            inner,
        ));

        multi.write(Severity::Info, "dropped");
        multi.write(Severity::Alert, "kept");

        assert_eq!(lines.lock().len(), 1);
    }
}
