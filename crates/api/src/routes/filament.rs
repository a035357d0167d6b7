//! Route definitions for the filament catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::filament;
use crate::state::AppState;

/// Routes mounted at `/filaments`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> deactivate
/// GET    /{id}/prices   -> list_prices
/// POST   /{id}/prices   -> create_price
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(filament::list).post(filament::create))
        .route(
            "/{id}",
            get(filament::get_by_id)
                .put(filament::update)
                .delete(filament::deactivate),
        )
        .route(
            "/{id}/prices",
            get(filament::list_prices).post(filament::create_price),
        )
}
