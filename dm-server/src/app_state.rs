use dm_config::{AuthConfig, SearchConfig};

use sqlx::SqlitePool;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: AuthConfig,
    pub search: SearchConfig,
}
