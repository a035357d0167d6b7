pub mod estimate_settings;
pub mod estimation;
pub mod filament;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /estimates                                       estimate (POST)
/// /estimates/profiles                              list profiles (GET)
///
/// /filaments                                       list, create
/// /filaments/{id}                                  get, update, deactivate
/// /filaments/{id}/prices                           price history, append price
///
/// /estimate-settings                               get, update (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Print cost & time estimation.
        .nest("/estimates", estimation::router())
        // Filament catalog and price history.
        .nest("/filaments", filament::router())
        // Custom-text surcharge settings.
        .nest("/estimate-settings", estimate_settings::router())
}
