//! Repository for the `filament_prices` table.
//!
//! Prices are append-only; the newest row per filament is the current price.

use printshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::filament::{CreateFilamentPrice, FilamentPrice};

/// Column list for `filament_prices` SELECT queries.
const COLUMNS: &str = "id, filament_id, price_per_gram, created_at";

/// Provides query operations for filament price history.
pub struct FilamentPriceRepo;

impl FilamentPriceRepo {
    /// Append a price to a filament's history.
    pub async fn create(
        pool: &PgPool,
        filament_id: DbId,
        input: &CreateFilamentPrice,
    ) -> Result<FilamentPrice, sqlx::Error> {
        let query = format!(
            "INSERT INTO filament_prices (filament_id, price_per_gram) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FilamentPrice>(&query)
            .bind(filament_id)
            .bind(input.price_per_gram)
            .fetch_one(pool)
            .await
    }

    /// The most recent price for a filament. Ties on `created_at` go to the
    /// later insert.
    pub async fn find_latest_for_filament(
        pool: &PgPool,
        filament_id: DbId,
    ) -> Result<Option<FilamentPrice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM filament_prices \
             WHERE filament_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, FilamentPrice>(&query)
            .bind(filament_id)
            .fetch_optional(pool)
            .await
    }

    /// Price history for a filament, newest first.
    pub async fn list_for_filament(
        pool: &PgPool,
        filament_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FilamentPrice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM filament_prices \
             WHERE filament_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, FilamentPrice>(&query)
            .bind(filament_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
