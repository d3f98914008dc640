//! Request-scoped logger binding.
//!
//! # Data Flow
//! ```text
//! Context::background()
//!     → with_logger(&ctx, logger)   derived context, parent untouched
//!     → logger_from(&ctx)           bound logger, or default_logger()
//!
//! HTTP requests:
//!     request.rs middleware derives a per-request logger (request_id span)
//!     → stored in http::Extensions under the same private key
//!     → handlers call request.logger()
//! ```
//!
//! # Design Decisions
//! - Values are keyed by type; the logger key type is private to this crate
//! - Lookup never fails, a missing logger falls back to the default

pub mod request;

use http::Extensions;

use crate::logging::{default_logger, Logger};

pub use request::{attach_request_logger, RequestLoggerExt, REQUEST_ID_HEADER};

/// Private key under which a logger is stored.
#[derive(Clone)]
pub(crate) struct BoundLogger(pub(crate) Logger);

/// Immutable carrier of request-scoped values.
///
/// Deriving a context with [`Context::with_value`] copies the parent's values;
/// the parent is never modified.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: Extensions,
}

impl Context {
    /// The empty root context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context that additionally carries `value`, replacing any
    /// value of the same type.
    pub fn with_value<T>(&self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        let mut values = self.values.clone();
        values.insert(value);
        Self { values }
    }

    pub fn value<T>(&self) -> Option<&T>
    where
        T: Send + Sync + 'static,
    {
        self.values.get::<T>()
    }
}

/// Derive a context carrying `logger`.
pub fn with_logger(ctx: &Context, logger: Logger) -> Context {
    ctx.with_value(BoundLogger(logger))
}

/// The logger bound to `ctx`, or the process-wide default.
pub fn logger_from(ctx: &Context) -> Logger {
    ctx.value::<BoundLogger>()
        .map(|bound| bound.0.clone())
        .unwrap_or_else(|| default_logger().clone())
}
