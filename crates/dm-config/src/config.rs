use crate::{
    AuthConfig, CONFIG_DIR_ENV, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LogLevel, LoggingConfig, MatchMode, SearchConfig, ServerConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for DM_CONFIG_DIR env var, else use ./.dm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DM_CONFIG_DIR env var > ./.dm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        Ok(PathBuf::from(DEFAULT_CONFIG_DIR))
    }

    /// Absolute-ish path of the SQLite file (config dir + database.file)
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.file))
    }

    /// Environment variables win over config.toml values.
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("DM_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_parse("DM_SERVER_PORT") {
            self.server.port = port;
        }
        if let Ok(file) = std::env::var("DM_DATABASE_FILE") {
            self.database.file = file;
        }
        if let Some(enabled) = env_parse("DM_AUTH_ENABLED") {
            self.auth.enabled = enabled;
        }
        if let Ok(admin) = std::env::var("DM_AUTH_DEFAULT_ADMIN") {
            self.auth.default_admin = admin;
        }
        if let Ok(mode) = std::env::var("DM_SEARCH_MATCH_MODE") {
            if let Ok(mode) = MatchMode::from_str(&mode) {
                self.search.match_mode = mode;
            } else {
                log::warn!("Ignoring invalid DM_SEARCH_MATCH_MODE: {}", mode);
            }
        }
        if let Some(case_sensitive) = env_parse("DM_SEARCH_CASE_SENSITIVE") {
            self.search.case_sensitive = case_sensitive;
        }
        if let Ok(level) = std::env::var("DM_LOG_LEVEL") {
            // FromStr never fails, unknown strings fall back to Info
            self.logging.level = LogLevel::from_str(&level).unwrap();
        }
        if let Some(colored) = env_parse("DM_LOG_COLORED") {
            self.logging.colored = colored;
        }
        if let Ok(file) = std::env::var("DM_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log the effective configuration at startup
    pub fn log_summary(&self) {
        info!("Config: bind_addr={}", self.bind_addr());
        info!("Config: database.file={}", self.database.file);
        info!(
            "Config: auth.enabled={}, search.match_mode={:?}, search.case_sensitive={}",
            self.auth.enabled, self.search.match_mode, self.search.case_sensitive
        );
    }
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}
