use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. All mutable state lives in the database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: clipfix_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
