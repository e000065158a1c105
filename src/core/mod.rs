//! Core logger types and traits

pub mod context;
pub mod error;
pub mod format;
pub mod logger;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use context::{Context, FieldValue};
pub use error::{LoggerError, Result};
pub use format::{FormatFn, LogFormat};
pub use logger::{Logger, LoggerBuilder};
pub use severity::Severity;
pub use sink::{SharedSink, Sink};
pub use timestamp::TimestampFormat;
