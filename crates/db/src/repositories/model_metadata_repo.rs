//! Repository for the `model_metadata` table.

use printshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::model_metadata::{ModelMetadata, UpsertModelMetadata};

/// Column list for `model_metadata` SELECT queries.
const COLUMNS: &str = "id, model_id, file_name, volume_mm3, created_at, updated_at";

/// Provides query operations for model metadata.
pub struct ModelMetadataRepo;

impl ModelMetadataRepo {
    /// Insert metadata for a model, or replace it if the model already has a row.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertModelMetadata,
    ) -> Result<ModelMetadata, sqlx::Error> {
        let query = format!(
            "INSERT INTO model_metadata (model_id, file_name, volume_mm3) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (model_id) DO UPDATE SET \
                file_name = EXCLUDED.file_name, \
                volume_mm3 = EXCLUDED.volume_mm3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ModelMetadata>(&query)
            .bind(input.model_id)
            .bind(&input.file_name)
            .bind(input.volume_mm3)
            .fetch_one(pool)
            .await
    }

    /// Find the metadata row for a model.
    pub async fn find_by_model_id(
        pool: &PgPool,
        model_id: DbId,
    ) -> Result<Option<ModelMetadata>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM model_metadata WHERE model_id = $1");
        sqlx::query_as::<_, ModelMetadata>(&query)
            .bind(model_id)
            .fetch_optional(pool)
            .await
    }
}
