//! Process-wide default logger.

use std::sync::OnceLock;

use tracing::{dispatcher, Dispatch};

use crate::logging::factory::build_logger_from_env;
use crate::logging::logger::Logger;

static DEFAULT_LOGGER: LoggerCell = LoggerCell::new(build_logger_from_env);

/// The process-wide logger, built from the environment on first call.
///
/// Concurrent first callers block until the single construction finishes.
/// Every call returns the same instance; it is never replaced. If the
/// environment's output could not be opened this is a no-op logger, which
/// hosts can detect with [`Logger::is_noop`].
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get()
}

/// A logger built at most once, on first access.
pub(crate) struct LoggerCell {
    cell: OnceLock<Logger>,
    init: fn() -> Logger,
}

impl LoggerCell {
    pub(crate) const fn new(init: fn() -> Logger) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    /// Construction runs with no subscriber in scope, so a first access from
    /// inside another logger's `in_scope` writes nothing to that logger.
    pub(crate) fn get(&self) -> &Logger {
        self.cell
            .get_or_init(|| dispatcher::with_default(&Dispatch::none(), self.init))
    }
}
