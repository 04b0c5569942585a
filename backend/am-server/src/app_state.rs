use crate::AuditMetrics;

use am_config::ApiConfig;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub api_config: ApiConfig,
    pub metrics: AuditMetrics,
}

impl AppState {
    pub fn new(pool: SqlitePool, api_config: ApiConfig) -> Self {
        Self {
            pool,
            api_config,
            metrics: AuditMetrics::new(),
        }
    }
}
