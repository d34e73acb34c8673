pub mod auth_config;
pub mod config;
pub mod database_config;
pub mod error;
pub mod log_level;
pub mod logging_config;
pub mod search_config;
pub mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, Result as ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use search_config::{MatchMode, SearchConfig};
pub use server_config::ServerConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3500;
pub const MIN_PORT: u16 = 1024;

pub const DEFAULT_DATABASE_FILE: &str = "dm.sqlite3";
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

pub const DEFAULT_LOG_LEVEL_STRING: &str = "info";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Config directory override, then `./.dm/`
pub const CONFIG_DIR_ENV: &str = "DM_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".dm";
