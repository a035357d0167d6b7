use std::sync::Arc;

use printshop_core::estimation::EstimateSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: printshop_db::DbPool,
    /// Server configuration, including estimation parameters.
    pub config: Arc<ServerConfig>,
    /// Lookups used by the estimation engine.
    pub estimate_source: Arc<dyn EstimateSource>,
}
