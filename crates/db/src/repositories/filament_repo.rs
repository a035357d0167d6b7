//! Repository for the `filaments` table.

use printshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::filament::{CreateFilament, Filament, UpdateFilament};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, material, description, is_active, created_at, updated_at";

/// Provides CRUD operations for filaments.
pub struct FilamentRepo;

impl FilamentRepo {
    /// Insert a new filament, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFilament) -> Result<Filament, sqlx::Error> {
        let query = format!(
            "INSERT INTO filaments (name, material, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Filament>(&query)
            .bind(&input.name)
            .bind(&input.material)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a filament by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Filament>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM filaments WHERE id = $1");
        sqlx::query_as::<_, Filament>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active filament by exact name.
    pub async fn find_active_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<Filament>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM filaments WHERE name = $1 AND is_active = true");
        sqlx::query_as::<_, Filament>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List filaments ordered by name, optionally including inactive ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Filament>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM filaments ORDER BY name")
        } else {
            format!("SELECT {COLUMNS} FROM filaments WHERE is_active = true ORDER BY name")
        };
        sqlx::query_as::<_, Filament>(&query).fetch_all(pool).await
    }

    /// Update a filament. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFilament,
    ) -> Result<Option<Filament>, sqlx::Error> {
        let query = format!(
            "UPDATE filaments SET \
                name = COALESCE($2, name), \
                material = COALESCE($3, material), \
                description = COALESCE($4, description), \
                is_active = COALESCE($5, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Filament>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.material)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Deactivate a filament. Price history is kept.
    ///
    /// Idempotent: returns `true` whenever the row exists.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE filaments SET is_active = false WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
