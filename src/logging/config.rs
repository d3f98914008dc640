//! Logger configuration.
//!
//! All types derive Serde traits so a host can embed [`LoggerConfig`] in its
//! own config file. Parsing of mode and level is total.

use std::convert::Infallible;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::logging::level::LogLevel;

/// Environment variable selecting the mode (`develop` for development).
pub const MODE_ENV: &str = "LOG_MODE";

/// Environment variable holding the raw level string.
pub const LEVEL_ENV: &str = "LOG_LEVEL";

/// Preset base configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    /// Pretty, human-readable output with source locations.
    Development,
    /// JSON lines, no colors.
    #[default]
    Production,
}

impl Mode {
    /// Interpret a `LOG_MODE` value. Only `develop` selects development.
    pub fn from_env_value(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("develop") {
            Mode::Development
        } else {
            Mode::Production
        }
    }

    pub fn from_develop_flag(develop: bool) -> Self {
        if develop {
            Mode::Development
        } else {
            Mode::Production
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Mode::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    /// Accepts the env spelling `develop` as well as the canonical `development`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("development") {
            return Ok(Mode::Development);
        }
        Ok(Self::from_env_value(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Mode {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(mode) => mode,
            Err(never) => match never {},
        }
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Stderr,
    Stdout,
    /// Append to a file, creating it if missing.
    File(PathBuf),
}

/// Complete description of a logger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Preset base (format, colors, dpanic behavior).
    pub mode: Mode,

    /// Minimum severity written.
    pub level: LogLevel,

    /// Output sink.
    pub output: Output,
}

impl LoggerConfig {
    pub fn new(mode: Mode, level: LogLevel) -> Self {
        Self {
            mode,
            level,
            output: Output::default(),
        }
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Create configuration from `LOG_MODE` and `LOG_LEVEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// Unset variables read as empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = lookup(MODE_ENV).unwrap_or_default();
        let level = lookup(LEVEL_ENV).unwrap_or_default();

        Self::new(Mode::from_env_value(&mode), LogLevel::parse(&level))
    }
}
