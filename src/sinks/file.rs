//! File sink implementation

use crate::core::{LoggerError, Result, Severity, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Appends formatted lines to a file.
///
/// The file is opened (or created) in append mode once at construction;
/// opening is the one fallible step and surfaces an I/O error to the caller.
/// Every call appends one line. The mutex serializes concurrent writers on
/// the shared handle. Write failures at call time are discarded; logging is
/// fire-and-forget.
#[derive(Debug)]
pub struct FileSink {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_sink(path.display().to_string(), e))?;

        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    /// Path this sink appends to
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&self, _level: Severity, line: &str) {
        let mut file = self.file.lock();
        let _ = writeln!(file, "{}", line);
    }
}
