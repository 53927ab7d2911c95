//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the jsonedit crates at this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "jsonedit=debug",
            LogLevel::Info => "jsonedit=info",
            LogLevel::Warning => "jsonedit=warn",
            LogLevel::Error => "jsonedit=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
