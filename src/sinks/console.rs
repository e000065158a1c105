//! Console sink implementation

use crate::core::{Severity, Sink};

/// Writes formatted lines to the process console.
///
/// Severities at least as severe as `Error` go to standard error, the rest
/// to standard output; every call appends a trailing newline. This is the
/// default sink installed when a logger is built with an empty sink list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write(&self, level: Severity, line: &str) {
        if level <= Severity::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_sink_writes_without_panicking() {
        let sink = ConsoleSink::new();
        sink.write(Severity::Info, "to stdout");
        sink.write(Severity::Error, "to stderr");
        sink.write(Severity::Emergency, "to stderr");
    }
}
