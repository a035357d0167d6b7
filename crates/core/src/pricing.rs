//! Money helpers: surcharge rates, price validation, and cent rounding.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Fixed custom-text fee (USD) applied when no settings row exists.
pub const DEFAULT_CUSTOM_TEXT_BASE_COST: f64 = 2.00;
/// Per-character custom-text fee (USD) applied when no settings row exists.
pub const DEFAULT_CUSTOM_TEXT_COST_PER_CHAR: f64 = 0.10;

// ---------------------------------------------------------------------------
// Surcharge rates
// ---------------------------------------------------------------------------

/// Custom-text surcharge parameters, read from the settings row or defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurchargeRates {
    pub custom_text_base_cost: f64,
    pub custom_text_cost_per_char: f64,
}

impl Default for SurchargeRates {
    fn default() -> Self {
        Self {
            custom_text_base_cost: DEFAULT_CUSTOM_TEXT_BASE_COST,
            custom_text_cost_per_char: DEFAULT_CUSTOM_TEXT_COST_PER_CHAR,
        }
    }
}

impl SurchargeRates {
    /// Surcharge for `text`: base fee plus one per-char fee for each
    /// Unicode scalar value. Empty text costs nothing.
    pub fn surcharge_for(&self, text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let chars = text.chars().count() as f64;
        self.custom_text_base_cost + chars * self.custom_text_cost_per_char
    }

    /// Reject negative or non-finite rates.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_money("custom_text_base_cost", self.custom_text_base_cost)?;
        validate_money("custom_text_cost_per_char", self.custom_text_cost_per_char)
    }
}

// ---------------------------------------------------------------------------
// Validation & rounding
// ---------------------------------------------------------------------------

/// A money amount must be finite and non-negative.
pub fn validate_money(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

/// Round to two decimal places (half away from zero).
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
