//! Handlers for the `/filaments` resource.
//!
//! Manages the filament catalog and each filament's append-only price
//! history. The estimator prices prints with the newest price row of an
//! active filament.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use printshop_core::catalog::validate_filament_name;
use printshop_core::error::CoreError;
use printshop_core::pagination::{
    clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
use printshop_core::pricing::validate_money;
use printshop_core::types::DbId;
use printshop_db::models::filament::{
    CreateFilament, CreateFilamentPrice, Filament, UpdateFilament,
};
use printshop_db::repositories::{FilamentPriceRepo, FilamentRepo};

use crate::error::{AppError, AppResult};
use crate::query::{IncludeInactiveParams, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Filament",
        id,
    })
}

async fn ensure_filament(state: &AppState, id: DbId) -> AppResult<Filament> {
    FilamentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// GET /api/v1/filaments?include_inactive=false
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let filaments = FilamentRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(DataResponse { data: filaments }))
}

/// POST /api/v1/filaments
///
/// Create a filament. Duplicate names map to 409 via `uq_filaments_name`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFilament>,
) -> AppResult<impl IntoResponse> {
    validate_filament_name(&input.name)?;

    let filament = FilamentRepo::create(&state.pool, &input).await?;
    tracing::info!(filament_id = filament.id, name = %filament.name, "Filament created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: filament })))
}

/// GET /api/v1/filaments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let filament = ensure_filament(&state, id).await?;
    Ok(Json(DataResponse { data: filament }))
}

/// PUT /api/v1/filaments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFilament>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }
    if let Some(name) = &input.name {
        validate_filament_name(name)?;
    }

    let filament = FilamentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(filament_id = id, "Filament updated");

    Ok(Json(DataResponse { data: filament }))
}

/// DELETE /api/v1/filaments/{id}
///
/// Soft-deactivates the filament; it stops resolving for estimates.
/// Repeating the call on an inactive filament is a no-op.
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FilamentRepo::deactivate(&state.pool, id).await? {
        tracing::info!(filament_id = id, "Filament deactivated");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Price history
// ---------------------------------------------------------------------------

/// GET /api/v1/filaments/{id}/prices?limit=&offset=
///
/// Price history, newest first.
pub async fn list_prices(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    ensure_filament(&state, id).await?;

    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);
    let prices = FilamentPriceRepo::list_for_filament(&state.pool, id, limit, offset).await?;

    Ok(Json(DataResponse { data: prices }))
}

/// POST /api/v1/filaments/{id}/prices
///
/// Append a price. The new row becomes the filament's current price.
pub async fn create_price(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateFilamentPrice>,
) -> AppResult<impl IntoResponse> {
    validate_money("price_per_gram", input.price_per_gram)?;
    ensure_filament(&state, id).await?;

    let price = FilamentPriceRepo::create(&state.pool, id, &input).await?;
    tracing::info!(
        filament_id = id,
        price_id = price.id,
        price_per_gram = price.price_per_gram,
        "Filament price recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: price })))
}
