//! Route definitions for estimate settings.

use axum::routing::get;
use axum::Router;

use crate::handlers::estimate_settings;
use crate::state::AppState;

/// Routes mounted at `/estimate-settings`.
///
/// ```text
/// GET /    -> get
/// PUT /    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(estimate_settings::get).put(estimate_settings::update),
    )
}
