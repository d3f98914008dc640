//! Structured logger configuration.
//!
//! Builds `tracing` loggers from environment-derived settings, keeps a
//! process-wide default instance, and binds loggers to request-scoped contexts.

pub mod context;
pub mod error;
pub mod logging;

pub use context::{logger_from, with_logger, Context};
pub use error::{LoggerError, LoggerResult};
pub use logging::{
    build_logger, build_logger_from_env, default_logger, LogLevel, Logger, LoggerConfig, Mode,
    Output,
};
