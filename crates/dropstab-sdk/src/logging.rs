//! Per-component logging handles
//!
//! Each SDK component receives its own [`Logger`] at construction. The handle
//! carries the component name and the set of enabled severities, and forwards
//! enabled events to `tracing`. Installing a subscriber is left to the
//! application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity recognized by the `log_levels` option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
    Debug,
    Warn,
}

impl LogLevel {
    const fn bit(self) -> u8 {
        match self {
            LogLevel::Info => 1,
            LogLevel::Error => 1 << 1,
            LogLevel::Debug => 1 << 2,
            LogLevel::Warn => 1 << 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Error => "error",
            LogLevel::Debug => "debug",
            LogLevel::Warn => "warn",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "error" => Ok(LogLevel::Error),
            "debug" => Ok(LogLevel::Debug),
            "warn" => Ok(LogLevel::Warn),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Set of enabled severities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevels(u8);

impl LogLevels {
    /// Nothing is emitted
    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(
            LogLevel::Info.bit() | LogLevel::Error.bit() | LogLevel::Debug.bit() | LogLevel::Warn.bit(),
        )
    }

    pub fn contains(&self, level: LogLevel) -> bool {
        self.0 & level.bit() != 0
    }

    pub fn insert(&mut self, level: LogLevel) {
        self.0 |= level.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// `info` and `error` only
impl Default for LogLevels {
    fn default() -> Self {
        Self(LogLevel::Info.bit() | LogLevel::Error.bit())
    }
}

impl<'a> FromIterator<&'a LogLevel> for LogLevels {
    fn from_iter<I: IntoIterator<Item = &'a LogLevel>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl FromIterator<LogLevel> for LogLevels {
    fn from_iter<I: IntoIterator<Item = LogLevel>>(iter: I) -> Self {
        let mut levels = Self::none();
        for level in iter {
            levels.insert(level);
        }
        levels
    }
}

/// Logging handle owned by a single component
#[derive(Debug, Clone)]
pub struct Logger {
    component: &'static str,
    levels: LogLevels,
}

impl Logger {
    pub fn new(component: &'static str, levels: LogLevels) -> Self {
        Self { component, levels }
    }

    /// Handle for another component sharing the same enabled levels
    pub fn for_component(&self, component: &'static str) -> Self {
        Self::new(component, self.levels)
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn levels(&self) -> LogLevels {
        self.levels
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.levels.contains(level)
    }

    pub fn info(&self, message: impl fmt::Display) {
        if self.enabled(LogLevel::Info) {
            tracing::info!(component = self.component, "{}", message);
        }
    }

    pub fn warn(&self, message: impl fmt::Display) {
        if self.enabled(LogLevel::Warn) {
            tracing::warn!(component = self.component, "{}", message);
        }
    }

    pub fn error(&self, message: impl fmt::Display) {
        if self.enabled(LogLevel::Error) {
            tracing::error!(component = self.component, "{}", message);
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        if self.enabled(LogLevel::Debug) {
            tracing::debug!(component = self.component, "{}", message);
        }
    }
}
