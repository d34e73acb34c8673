use crate::{ConfigError, ConfigErrorResult, DEFAULT_ADMIN_USERNAME};

use serde::Deserialize;

/// Settings for the upstream authentication gate.
///
/// The dashboard itself never authenticates anyone; it only reads the
/// identity the gate resolved. With `enabled = false` (development mode)
/// every request acts as `default_admin`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// Identity assumed when the gate is disabled
    pub default_admin: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_admin: String::from(DEFAULT_ADMIN_USERNAME),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled && self.default_admin.is_empty() {
            return Err(ConfigError::config(
                "auth.default_admin must not be empty when auth is disabled",
            ));
        }

        Ok(())
    }
}
