//! Handlers for print cost & time estimation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use printshop_core::estimation::{self, PrintEstimateRequest, PrintProfile};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// A print profile and the speed it is configured with.
#[derive(Debug, Serialize)]
pub struct ProfileInfo {
    pub name: &'static str,
    pub speed_mm3_per_sec: f64,
}

// ---------------------------------------------------------------------------
// POST /estimates
// ---------------------------------------------------------------------------

/// Estimate print time and cost for a model.
///
/// Validates the request shape, then delegates to the engine in
/// `printshop_core`, which resolves its inputs through the state's
/// estimate source.
pub async fn estimate(
    State(state): State<AppState>,
    Json(body): Json<PrintEstimateRequest>,
) -> AppResult<impl IntoResponse> {
    estimation::validate_estimate_request(&body)?;

    let result = estimation::calculate_estimate(
        state.estimate_source.as_ref(),
        &state.config.estimation,
        &body,
    )
    .await?;

    tracing::debug!(
        model_id = body.model_id,
        filament = %body.filament_type,
        profile = %body.print_profile,
        has_custom_text = body.custom_text().is_some(),
        minutes = result.estimated_time_minutes,
        cost_usd = result.estimated_cost_usd,
        "Print estimate computed",
    );

    Ok(Json(DataResponse { data: result }))
}

// ---------------------------------------------------------------------------
// GET /estimates/profiles
// ---------------------------------------------------------------------------

/// List the print profiles with their configured speeds.
pub async fn list_profiles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profiles: Vec<ProfileInfo> = PrintProfile::ALL
        .into_iter()
        .map(|profile| ProfileInfo {
            name: profile.as_str(),
            speed_mm3_per_sec: state.config.estimation.speed(profile),
        })
        .collect();
    Ok(Json(DataResponse { data: profiles }))
}
