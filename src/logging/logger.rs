//! The logger handle handed out by the factory.

use std::fmt;
use std::process;
use std::sync::Arc;

use tracing::{dispatcher, Dispatch, Span};

use crate::logging::config::Mode;
use crate::logging::level::LogLevel;

/// A configured structured logger.
///
/// Cheap to clone and safe to share between threads. Events go to the
/// logger's own `tracing` subscriber, not the global one.
///
/// Terminal levels act regardless of the level gate: [`Logger::panic`] always
/// panics, [`Logger::fatal`] always exits the process, and [`Logger::dpanic`]
/// panics in development mode.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    dispatch: Dispatch,
    mode: Mode,
    level: LogLevel,
    span: Option<Span>,
    noop: bool,
}

impl Logger {
    pub(crate) fn new(dispatch: Dispatch, mode: Mode, level: LogLevel) -> Self {
        Self {
            inner: Arc::new(Inner {
                dispatch,
                mode,
                level,
                span: None,
                noop: false,
            }),
        }
    }

    /// A logger that writes nothing.
    pub fn noop() -> Self {
        Self {
            inner: Arc::new(Inner {
                dispatch: Dispatch::none(),
                mode: Mode::Production,
                level: LogLevel::default(),
                span: None,
                noop: true,
            }),
        }
    }

    pub fn mode(&self) -> Mode {
        self.inner.mode
    }

    pub fn level(&self) -> LogLevel {
        self.inner.level
    }

    pub fn is_noop(&self) -> bool {
        self.inner.noop
    }

    /// Whether an event at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        !self.inner.noop && level >= self.inner.level
    }

    /// True if both handles refer to the same logger instance.
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Run `f` with this logger's subscriber as the current default, inside
    /// its span if it has one.
    ///
    /// Any `tracing` macro called from `f` is recorded by this logger:
    ///
    /// ```
    /// let logger = logkit::build_logger(false, "debug");
    /// logger.in_scope(|| tracing::info!(user_id = 42, "signed in"));
    /// ```
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.inner.dispatch, || match &self.inner.span {
            Some(span) => span.in_scope(f),
            None => f(),
        })
    }

    /// Derive a logger whose events are recorded inside `span`.
    ///
    /// Create the span through [`Logger::in_scope`] so it belongs to this
    /// logger's subscriber and nests under the current span:
    ///
    /// ```
    /// let logger = logkit::build_logger(false, "info");
    /// let span = logger.in_scope(|| tracing::info_span!("job", job_id = 7));
    /// logger.with_span(span).info("started");
    /// ```
    pub fn with_span(&self, span: Span) -> Logger {
        Self {
            inner: Arc::new(Inner {
                dispatch: self.inner.dispatch.clone(),
                mode: self.inner.mode,
                level: self.inner.level,
                span: Some(span),
                noop: self.inner.noop,
            }),
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.write(LogLevel::Debug, &message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.write(LogLevel::Info, &message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.write(LogLevel::Warn, &message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.write(LogLevel::Error, &message);
    }

    /// Log at `DPanic`, then panic if the logger is in development mode.
    pub fn dpanic(&self, message: impl fmt::Display) {
        self.write(LogLevel::DPanic, &message);
        if self.inner.mode.is_development() {
            panic!("{message}");
        }
    }

    /// Log at `Panic`, then panic.
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.write(LogLevel::Panic, &message);
        panic!("{message}");
    }

    /// Log at `Fatal`, then exit the process with status 1.
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.write(LogLevel::Fatal, &message);
        process::exit(1);
    }

    /// Log at a level chosen at runtime, with that level's terminal behavior.
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        match level {
            LogLevel::DPanic => self.dpanic(message),
            LogLevel::Panic => self.panic(message),
            LogLevel::Fatal => self.fatal(message),
            _ => self.write(level, &message),
        }
    }

    fn write(&self, level: LogLevel, message: &dyn fmt::Display) {
        if !self.enabled(level) {
            return;
        }
        self.in_scope(|| match level {
            LogLevel::Debug => tracing::debug!(severity = %level, "{message}"),
            LogLevel::Info => tracing::info!(severity = %level, "{message}"),
            LogLevel::Warn => tracing::warn!(severity = %level, "{message}"),
            LogLevel::Error | LogLevel::DPanic | LogLevel::Panic | LogLevel::Fatal => {
                tracing::error!(severity = %level, "{message}")
            }
        });
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("mode", &self.inner.mode)
            .field("level", &self.inner.level)
            .field("noop", &self.inner.noop)
            .finish_non_exhaustive()
    }
}
