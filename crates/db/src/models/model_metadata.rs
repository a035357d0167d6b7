//! Model metadata entity and DTOs.
//!
//! Rows are produced by the upload pipeline after mesh analysis; the
//! estimation engine only reads `volume_mm3`.

use printshop_core::estimation::ModelRecord;
use printshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `model_metadata` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModelMetadata {
    pub id: DbId,
    pub model_id: DbId,
    pub file_name: Option<String>,
    pub volume_mm3: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording (or re-recording) a model's extracted metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertModelMetadata {
    pub model_id: DbId,
    pub file_name: Option<String>,
    pub volume_mm3: f64,
}

impl From<ModelMetadata> for ModelRecord {
    fn from(row: ModelMetadata) -> Self {
        Self {
            model_id: row.model_id,
            volume_mm3: row.volume_mm3,
        }
    }
}
