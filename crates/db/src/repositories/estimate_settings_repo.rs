//! Repository for the `estimate_settings` table.
//!
//! The table holds at most one row (`uq_estimate_settings_singleton`);
//! writes upsert it in place.

use sqlx::PgPool;

use crate::models::estimate_settings::{EstimateSettings, UpsertEstimateSettings};

/// Column list for `estimate_settings` SELECT queries.
const COLUMNS: &str =
    "id, custom_text_base_cost, custom_text_cost_per_char, created_at, updated_at";

/// Provides query operations for estimate settings.
pub struct EstimateSettingsRepo;

impl EstimateSettingsRepo {
    /// The current settings row, if one exists.
    pub async fn find(pool: &PgPool) -> Result<Option<EstimateSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM estimate_settings LIMIT 1");
        sqlx::query_as::<_, EstimateSettings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Replace the settings, creating the row on first write.
    ///
    /// Concurrent first writes converge on the single row via the
    /// `uq_estimate_settings_singleton` key.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertEstimateSettings,
    ) -> Result<EstimateSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO estimate_settings (custom_text_base_cost, custom_text_cost_per_char) \
             VALUES ($1, $2) \
             ON CONFLICT (singleton) DO UPDATE SET \
                custom_text_base_cost = EXCLUDED.custom_text_base_cost, \
                custom_text_cost_per_char = EXCLUDED.custom_text_cost_per_char \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EstimateSettings>(&query)
            .bind(input.custom_text_base_cost)
            .bind(input.custom_text_cost_per_char)
            .fetch_one(pool)
            .await
    }
}
