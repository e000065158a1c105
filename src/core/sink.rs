//! Sink trait for log output destinations

use super::severity::Severity;
use std::sync::Arc;

/// An output destination for formatted log lines.
///
/// A sink receives the original severity together with the already-formatted
/// line and delivers it somewhere as a side effect. Sinks take `&self` and
/// must be independently safe for concurrent invocation; stateful sinks
/// serialize their own writes with interior mutability.
///
/// Any `Fn(Severity, &str)` closure is a sink:
///
/// ```
/// use logz::prelude::*;
///
/// let logger = Logger::builder()
///     .sink_fn(|_level, line| println!("{}", line))
///     .build();
/// logger.info("hello");
/// ```
pub trait Sink: Send + Sync {
    fn write(&self, level: Severity, line: &str);
}

impl<F> Sink for F
where
    F: Fn(Severity, &str) + Send + Sync,
{
    fn write(&self, level: Severity, line: &str) {
        self(level, line)
    }
}

/// Shared handle to a sink, cheap to clone into combinators
pub type SharedSink = Arc<dyn Sink>;

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_closure_is_a_sink() {
        let captured: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let captured_clone = Arc::clone(&captured);

        let sink = move |_level: Severity, line: &str| {
            captured_clone.lock().push(line.to_string());
        };
        sink.write(Severity::Info, "first");
        sink.write(Severity::Error, "second");

        assert_eq!(*captured.lock(), vec!["first", "second"]);
    }

    #[test]
    fn test_shared_sink_object() {
        let sink: SharedSink = Arc::new(|_level: Severity, _line: &str| {});
        sink.write(Severity::Debug, "ignored");
    }
}
