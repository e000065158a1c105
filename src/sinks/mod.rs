//! Sink implementations and combinators

pub mod combinators;
pub mod console;
pub mod file;
pub mod writer;

pub use combinators::{LevelFilterSink, MultiSink, SplitSink};
pub use console::ConsoleSink;
pub use file::FileSink;
pub use writer::WriterSink;

pub use crate::core::Sink;
