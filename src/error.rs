//! Logger construction errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a logger.
///
/// Only surfaced by [`LoggerConfig::try_build`](crate::LoggerConfig::try_build);
/// the infallible builders recover from them with a no-op logger.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The configured output could not be opened for writing.
    #[error("failed to open log output {}: {source}", .path.display())]
    OpenSink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for logger construction.
pub type LoggerResult<T> = Result<T, LoggerError>;
