//! Logger construction subsystem.
//!
//! # Data Flow
//! ```text
//! LOG_MODE / LOG_LEVEL
//!     → config.rs (Mode, LogLevel, LoggerConfig; total parsing)
//!     → factory.rs (tracing-subscriber layer → Dispatch)
//!     → logger.rs (Logger handle, shared via Arc)
//!
//! First call to default_logger():
//!     default.rs runs the env factory exactly once
//!     → every caller receives the same &'static Logger
//! ```
//!
//! # Design Decisions
//! - Development mode writes pretty multi-line output, production writes JSON lines
//! - Unknown level or mode strings normalize to info / production, never error
//! - A sink that cannot be opened yields a no-op logger instead of an error

pub mod config;
pub mod default;
pub mod factory;
pub mod level;
pub mod logger;

pub use config::{LoggerConfig, Mode, Output, LEVEL_ENV, MODE_ENV};
pub use default::default_logger;
pub use factory::{build_logger, build_logger_from_env};
pub use level::LogLevel;
pub use logger::Logger;
