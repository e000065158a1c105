//! Writer sink for arbitrary byte streams

use crate::core::{Severity, Sink};
use parking_lot::Mutex;
use std::io::Write;

/// Appends formatted lines to an already-open `io::Write` stream.
///
/// Same line-per-call contract as [`crate::sinks::FileSink`]; the stream is
/// wrapped in a mutex so the sink can be invoked concurrently. Write errors
/// are discarded.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, _level: Severity, line: &str) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", line);
    }
}
