//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors surfaced at construction time.
///
/// Logging calls themselves never fail: formatting problems produce
/// best-effort output and sink write errors are fire-and-forget. The one
/// error a caller must handle is opening a file sink.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File sink could not open or create its target
    #[error("failed to open log file '{path}': {source}")]
    FileSink {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("invalid logger configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl LoggerError {
    /// Create a file sink error carrying the offending path
    pub fn file_sink(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileSink {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            message: message.into(),
        }
    }
}
