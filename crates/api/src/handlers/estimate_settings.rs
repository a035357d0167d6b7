//! Handlers for the global custom-text surcharge settings.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use printshop_core::pricing::SurchargeRates;
use printshop_core::types::Timestamp;
use printshop_db::models::estimate_settings::UpsertEstimateSettings;
use printshop_db::repositories::EstimateSettingsRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Effective surcharge settings.
///
/// `is_default` is true when no row is stored and the built-in defaults apply.
#[derive(Debug, Serialize)]
pub struct EstimateSettingsView {
    pub custom_text_base_cost: f64,
    pub custom_text_cost_per_char: f64,
    pub is_default: bool,
    pub updated_at: Option<Timestamp>,
}

/// GET /api/v1/estimate-settings
pub async fn get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let view = match EstimateSettingsRepo::find(&state.pool).await? {
        Some(row) => EstimateSettingsView {
            custom_text_base_cost: row.custom_text_base_cost,
            custom_text_cost_per_char: row.custom_text_cost_per_char,
            is_default: false,
            updated_at: Some(row.updated_at),
        },
        None => {
            let defaults = SurchargeRates::default();
            EstimateSettingsView {
                custom_text_base_cost: defaults.custom_text_base_cost,
                custom_text_cost_per_char: defaults.custom_text_cost_per_char,
                is_default: true,
                updated_at: None,
            }
        }
    };
    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/estimate-settings
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpsertEstimateSettings>,
) -> AppResult<impl IntoResponse> {
    input.rates().validate()?;

    let row = EstimateSettingsRepo::upsert(&state.pool, &input).await?;
    tracing::info!(
        base_cost = row.custom_text_base_cost,
        cost_per_char = row.custom_text_cost_per_char,
        "Estimate settings updated",
    );

    Ok(Json(DataResponse {
        data: EstimateSettingsView {
            custom_text_base_cost: row.custom_text_base_cost,
            custom_text_cost_per_char: row.custom_text_cost_per_char,
            is_default: false,
            updated_at: Some(row.updated_at),
        },
    }))
}
