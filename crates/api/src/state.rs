use std::sync::Arc;

use clinic_core::dto::DtoConfig;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: clinic_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Settings handed to every DTO mapper.
    pub dto: Arc<DtoConfig>,
}

impl AppState {
    pub fn new(pool: clinic_db::DbPool, config: ServerConfig) -> Self {
        let dto = Arc::new(config.dto_config());
        Self {
            pool,
            config: Arc::new(config),
            dto,
        }
    }
}
