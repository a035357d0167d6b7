//! Print cost & time estimation: constants, types, and the estimation engine.
//!
//! The engine resolves four read-only projections through an
//! [`EstimateSource`] (model volume, filament, latest filament price, optional
//! surcharge settings) and then applies a pure calculation:
//!
//! ```text
//! grams   = volume_mm3 * density
//! cost    = grams * price_per_gram (+ custom-text surcharge)
//! minutes = volume_mm3 / (profile_speed * 60)
//! ```
//!
//! Both outputs are rounded to two decimal places.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::pricing::{round_to_cents, SurchargeRates};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Average PLA density in grams per cubic millimetre.
pub const DENSITY_G_PER_MM3: f64 = 0.00124;

/// Volumetric print speed (mm³/s) of the `standard` profile.
pub const STANDARD_SPEED_MM3_PER_SEC: f64 = 8.0;
/// Volumetric print speed (mm³/s) of the `quality` profile.
pub const QUALITY_SPEED_MM3_PER_SEC: f64 = 5.0;
/// Volumetric print speed (mm³/s) of the `elite` profile.
pub const ELITE_SPEED_MM3_PER_SEC: f64 = 3.5;

/// Seconds per minute (60.0).
pub const SECS_PER_MINUTE: f64 = 60.0;

// ---------------------------------------------------------------------------
// Print profile
// ---------------------------------------------------------------------------

/// A named print-quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintProfile {
    Standard,
    Quality,
    Elite,
}

impl PrintProfile {
    /// Every tier, fastest first.
    pub const ALL: [PrintProfile; 3] = [Self::Standard, Self::Quality, Self::Elite];

    /// Wire name of the tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quality => "quality",
            Self::Elite => "elite",
        }
    }

    /// Exact, case-sensitive lookup by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Tunable physical constants for the engine.
///
/// Injected by the caller instead of living in process-wide state; the
/// [`Default`] values are the documented constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationParams {
    pub density_g_per_mm3: f64,
    pub standard_speed: f64,
    pub quality_speed: f64,
    pub elite_speed: f64,
}

impl Default for EstimationParams {
    fn default() -> Self {
        Self {
            density_g_per_mm3: DENSITY_G_PER_MM3,
            standard_speed: STANDARD_SPEED_MM3_PER_SEC,
            quality_speed: QUALITY_SPEED_MM3_PER_SEC,
            elite_speed: ELITE_SPEED_MM3_PER_SEC,
        }
    }
}

impl EstimationParams {
    /// Speed of a known tier.
    pub fn speed(&self, profile: PrintProfile) -> f64 {
        match profile {
            PrintProfile::Standard => self.standard_speed,
            PrintProfile::Quality => self.quality_speed,
            PrintProfile::Elite => self.elite_speed,
        }
    }

    /// Speed for a raw profile name. Unrecognized names use the `quality` speed.
    pub fn speed_for_name(&self, name: &str) -> f64 {
        let profile = PrintProfile::from_name(name).unwrap_or(PrintProfile::Quality);
        self.speed(profile)
    }

    /// Density and every speed must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("density_g_per_mm3", self.density_g_per_mm3),
            ("standard_speed", self.standard_speed),
            ("quality_speed", self.quality_speed),
            ("elite_speed", self.elite_speed),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::Validation(format!(
                    "{field} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

/// Request body for a print estimate.
///
/// `x_mm`, `y_mm`, `z_mm`, and `filament_colors` are accepted and validated
/// but reserved: the stored model volume drives the calculation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PrintEstimateRequest {
    pub model_id: DbId,
    #[validate(range(exclusive_min = 0.0))]
    pub x_mm: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub y_mm: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub z_mm: f64,
    #[validate(length(min = 1))]
    pub filament_type: String,
    pub filament_colors: Vec<String>,
    pub print_profile: String,
    #[serde(default)]
    pub custom_text: Option<String>,
}

impl PrintEstimateRequest {
    /// Custom text, if present and non-empty.
    pub fn custom_text(&self) -> Option<&str> {
        self.custom_text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Estimated print time and cost, both rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintEstimate {
    pub estimated_time_minutes: f64,
    pub estimated_cost_usd: f64,
}

/// Validate the shape of an estimate request.
pub fn validate_estimate_request(request: &PrintEstimateRequest) -> Result<(), CoreError> {
    request
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    // `range` lets NaN and infinity through.
    let dimensions = [
        ("x_mm", request.x_mm),
        ("y_mm", request.y_mm),
        ("z_mm", request.z_mm),
    ];
    for (field, value) in dimensions {
        if !value.is_finite() {
            return Err(CoreError::Validation(format!("{field} must be a finite number")));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Collaborator projections
// ---------------------------------------------------------------------------

/// The slice of a model's metadata the engine reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRecord {
    pub model_id: DbId,
    pub volume_mm3: f64,
}

/// The slice of a filament the engine reads.
#[derive(Debug, Clone, PartialEq)]
pub struct FilamentRecord {
    pub id: DbId,
    pub name: String,
}

/// One entry of a filament's price history.
#[derive(Debug, Clone, PartialEq)]
pub struct FilamentPriceRecord {
    pub id: DbId,
    pub filament_id: DbId,
    pub price_per_gram: f64,
    pub created_at: Timestamp,
}

/// Read-only lookups the engine depends on.
///
/// Implementations own their own latency, isolation, and failure semantics;
/// store failures are reported as [`CoreError::Source`].
#[async_trait]
pub trait EstimateSource: Send + Sync {
    async fn find_model_by_id(&self, model_id: DbId) -> Result<Option<ModelRecord>, CoreError>;

    /// Exact name match.
    async fn find_filament_by_name(&self, name: &str)
        -> Result<Option<FilamentRecord>, CoreError>;

    /// The price row with the latest `created_at` (highest id on ties).
    async fn find_latest_price_for_filament(
        &self,
        filament_id: DbId,
    ) -> Result<Option<FilamentPriceRecord>, CoreError>;

    async fn find_estimate_settings(&self) -> Result<Option<SurchargeRates>, CoreError>;
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Pure calculation over already-resolved inputs.
///
/// `surcharge` carries the non-empty custom text and the rates to apply.
/// Inputs large enough to overflow either output are an internal error.
pub fn compute_estimate(
    params: &EstimationParams,
    volume_mm3: f64,
    price_per_gram: f64,
    surcharge: Option<(&str, &SurchargeRates)>,
    print_profile: &str,
) -> Result<PrintEstimate, CoreError> {
    let grams = volume_mm3 * params.density_g_per_mm3;
    let mut cost = grams * price_per_gram;
    if let Some((text, rates)) = surcharge {
        cost += rates.surcharge_for(text);
    }

    let speed = params.speed_for_name(print_profile);
    let minutes = volume_mm3 / (speed * SECS_PER_MINUTE);

    let estimate = PrintEstimate {
        estimated_time_minutes: round_to_cents(minutes),
        estimated_cost_usd: round_to_cents(cost),
    };
    if !estimate.estimated_time_minutes.is_finite() || !estimate.estimated_cost_usd.is_finite() {
        return Err(CoreError::Internal(format!(
            "estimate overflowed for volume {volume_mm3} at {price_per_gram} per gram"
        )));
    }
    Ok(estimate)
}

/// Resolve inputs through `source` and compute the estimate.
///
/// Lookups run in order and fail fast: model, filament, latest price, then
/// settings (only when custom text is present; absence means defaults).
pub async fn calculate_estimate<S>(
    source: &S,
    params: &EstimationParams,
    request: &PrintEstimateRequest,
) -> Result<PrintEstimate, CoreError>
where
    S: EstimateSource + ?Sized,
{
    let model = source
        .find_model_by_id(request.model_id)
        .await?
        .ok_or(CoreError::ModelNotFound {
            model_id: request.model_id,
        })?;

    if !model.volume_mm3.is_finite() || model.volume_mm3 < 0.0 {
        return Err(CoreError::Internal(format!(
            "model {} has invalid volume {}",
            model.model_id, model.volume_mm3
        )));
    }

    let filament = source
        .find_filament_by_name(&request.filament_type)
        .await?
        .ok_or_else(|| CoreError::FilamentNotFound {
            name: request.filament_type.clone(),
        })?;

    let price = source
        .find_latest_price_for_filament(filament.id)
        .await?
        .ok_or(CoreError::PricingNotFound {
            filament_id: filament.id,
        })?;

    let rates = match request.custom_text() {
        Some(_) => Some(source.find_estimate_settings().await?.unwrap_or_default()),
        None => None,
    };
    let surcharge = request.custom_text().zip(rates.as_ref());

    compute_estimate(
        params,
        model.volume_mm3,
        price.price_per_gram,
        surcharge,
        &request.print_profile,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
