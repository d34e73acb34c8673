use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILE};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database filename, resolved relative to the config dir
    pub file: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_DATABASE_FILE),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.is_empty() {
            return Err(ConfigError::config("database.file must not be empty"));
        }

        Ok(())
    }
}
