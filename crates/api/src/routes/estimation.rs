//! Route definitions for print estimation.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::estimation;
use crate::state::AppState;

/// Estimation routes mounted at `/estimates`.
///
/// ```text
/// POST /                  -> estimate
/// GET  /profiles          -> list_profiles
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(estimation::estimate))
        .route("/profiles", get(estimation::list_profiles))
}
