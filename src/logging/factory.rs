//! Logger factory.
//!
//! Turns a [`LoggerConfig`] into a [`Logger`] backed by a
//! `tracing-subscriber` fmt layer behind its own `Dispatch`.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::sync::Mutex;

use tracing::Dispatch;
use tracing_subscriber::filter::{self, LevelFilter};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Layer, Registry};

use crate::error::{LoggerError, LoggerResult};
use crate::logging::config::{LoggerConfig, Mode, Output};
use crate::logging::level::LogLevel;
use crate::logging::logger::Logger;

/// Build a logger from a develop flag and a raw level string.
///
/// Never fails; see [`LoggerConfig::build`].
pub fn build_logger(develop: bool, level: &str) -> Logger {
    LoggerConfig::new(Mode::from_develop_flag(develop), LogLevel::parse(level)).build()
}

/// Build a logger from `LOG_MODE` and `LOG_LEVEL`.
pub fn build_logger_from_env() -> Logger {
    LoggerConfig::from_env().build()
}

impl LoggerConfig {
    /// Build the logger, substituting a no-op logger if the output cannot be
    /// opened.
    ///
    /// The failure is reported as a warning on the caller's current `tracing`
    /// dispatcher.
    pub fn build(&self) -> Logger {
        match self.try_build() {
            Ok(logger) => logger,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    mode = %self.mode,
                    min_level = %self.level,
                    "Logger construction failed, falling back to a no-op logger"
                );
                Logger::noop()
            }
        }
    }

    /// Build the logger, returning an error if the output cannot be opened.
    pub fn try_build(&self) -> LoggerResult<Logger> {
        Ok(match &self.output {
            Output::Stderr => self.assemble(io::stderr, io::stderr().is_terminal()),
            Output::Stdout => self.assemble(io::stdout, io::stdout().is_terminal()),
            Output::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| LoggerError::OpenSink {
                        path: path.clone(),
                        source,
                    })?;
                self.assemble(Mutex::new(file), false)
            }
        })
    }

    /// Build the logger against a caller-supplied writer, ignoring `output`.
    pub fn build_with_writer<W>(&self, make_writer: W) -> Logger
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        self.assemble(make_writer, false)
    }

    fn assemble<W>(&self, make_writer: W, ansi: bool) -> Logger
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::registry().with(self.layer(make_writer, ansi));
        Logger::new(Dispatch::new(subscriber), self.mode, self.level)
    }

    fn layer<W>(&self, make_writer: W, ansi: bool) -> Box<dyn Layer<Registry> + Send + Sync>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        // Spans always pass so their fields reach events that do.
        let max_level: LevelFilter = self.level.as_level_filter();
        let gate = filter::filter_fn(move |meta| meta.is_span() || *meta.level() <= max_level);

        match self.mode {
            Mode::Development => fmt::layer()
                .pretty()
                .with_ansi(ansi)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(make_writer)
                .with_filter(gate)
                .boxed(),
            Mode::Production => fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(true)
                .with_ansi(false)
                .with_target(true)
                .with_file(false)
                .with_line_number(false)
                .with_writer(make_writer)
                .with_filter(gate)
                .boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("logkit-{}-{}", uuid::Uuid::new_v4(), name))
    }

    #[test]
    fn test_unopenable_sink_is_an_error() {
        let path = scratch_path("missing-dir").join("app.log");
        let config = LoggerConfig::default().with_output(Output::File(path.clone()));

        match config.try_build() {
            Err(LoggerError::OpenSink { path: failed, .. }) => assert_eq!(failed, path),
            Ok(logger) => panic!("expected open failure, got {logger:?}"),
        }
    }

    #[test]
    fn test_unopenable_sink_falls_back_to_noop() {
        let path = scratch_path("missing-dir").join("app.log");
        let logger = LoggerConfig::new(Mode::Development, LogLevel::Debug)
            .with_output(Output::File(path))
            .build();

        assert!(logger.is_noop());
        logger.debug("dropped");
        logger.error("dropped");
        logger.dpanic("dropped without panicking");
    }

    #[test]
    fn test_file_sink_receives_json_lines() {
        let path = scratch_path("app.log");
        let logger = LoggerConfig::new(Mode::Production, LogLevel::Info)
            .with_output(Output::File(path.clone()))
            .try_build()
            .unwrap();

        logger.debug("suppressed");
        logger.info("written");
        logger.error("also written");

        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2, "unexpected output: {content}");
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["message"], "written");
        assert_eq!(first["level"], "INFO");
        assert_eq!(first["severity"], "info");
    }

    #[test]
    fn test_build_logger_normalizes_inputs() {
        let logger = build_logger(true, "  ERROR ");
        assert_eq!(logger.mode(), Mode::Development);
        assert_eq!(logger.level(), LogLevel::Error);
        assert!(!logger.is_noop());

        let logger = build_logger(false, "loud");
        assert_eq!(logger.mode(), Mode::Production);
        assert_eq!(logger.level(), LogLevel::Info);
    }
}
