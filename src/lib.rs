//! # logz
//!
//! RFC 5424 leveled, structured logging with composable output sinks.
//!
//! ## Features
//!
//! - **Eight severity levels**: Emergency through Debug, filtered by a
//!   minimum-severity threshold
//! - **Structured context**: per-call key-value fields, serialized into the
//!   text line or merged into the JSON object
//! - **Text, JSON, or custom formatting**: built-in modes plus a caller
//!   callback that replaces them entirely
//! - **Composable sinks**: console, file, arbitrary writer, and functional
//!   wrappers for fan-out, per-sink thresholds, and severity routing
//! - **Thread safe by construction**: loggers are immutable after build and
//!   dispatch synchronously on the caller's thread
//!
//! ## Example
//!
//! ```
//! use logz::prelude::*;
//!
//! let logger = Logger::builder()
//!     .min_level(Severity::Debug)
//!     .prefix("my-app")
//!     .build();
//!
//! logger.info("server started");
//! logger.error_with_context(
//!     "request failed",
//!     Context::new().with_field("code", 500).with_field("path", "/api/users"),
//! );
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Context, FieldValue, FormatFn, LogFormat, Logger, LoggerBuilder, LoggerError, Result,
        Severity, SharedSink, Sink, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, LevelFilterSink, MultiSink, SplitSink, WriterSink};
}

pub use core::{
    Context, FieldValue, FormatFn, LogFormat, Logger, LoggerBuilder, LoggerError, Result,
    Severity, SharedSink, Sink, TimestampFormat,
};
pub use sinks::{ConsoleSink, FileSink, LevelFilterSink, MultiSink, SplitSink, WriterSink};
