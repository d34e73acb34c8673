use crate::{DEFAULT_LOG_DIR, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Enable colored output (ignored when logging to file)
    pub colored: bool,
    /// Log filename; None = stdout
    pub file: Option<String>,
    /// Log directory, resolved relative to the config dir
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIR),
        }
    }
}
