//! Estimate settings entity and DTOs.

use printshop_core::pricing::SurchargeRates;
use printshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `estimate_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EstimateSettings {
    pub id: DbId,
    pub custom_text_base_cost: f64,
    pub custom_text_cost_per_char: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for replacing the surcharge settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertEstimateSettings {
    pub custom_text_base_cost: f64,
    pub custom_text_cost_per_char: f64,
}

impl EstimateSettings {
    pub fn rates(&self) -> SurchargeRates {
        SurchargeRates {
            custom_text_base_cost: self.custom_text_base_cost,
            custom_text_cost_per_char: self.custom_text_cost_per_char,
        }
    }
}

impl UpsertEstimateSettings {
    pub fn rates(&self) -> SurchargeRates {
        SurchargeRates {
            custom_text_base_cost: self.custom_text_base_cost,
            custom_text_cost_per_char: self.custom_text_cost_per_char,
        }
    }
}
