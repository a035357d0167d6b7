//! Filament catalog models and DTOs.
//!
//! Covers the `filaments` catalog and the append-only `filament_prices`
//! history that feeds cost estimation.

use printshop_core::estimation::{FilamentPriceRecord, FilamentRecord};
use printshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `filaments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Filament {
    pub id: DbId,
    pub name: String,
    pub material: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `filament_prices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilamentPrice {
    pub id: DbId,
    pub filament_id: DbId,
    pub price_per_gram: f64,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a filament.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilament {
    pub name: String,
    pub material: Option<String>,
    pub description: Option<String>,
}

/// DTO for partially updating a filament.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFilament {
    pub name: Option<String>,
    pub material: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateFilament {
    /// True when the payload would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.material.is_none()
            && self.description.is_none()
            && self.is_active.is_none()
    }
}

/// DTO for appending a price to a filament's history.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilamentPrice {
    pub price_per_gram: f64,
}

// ---------------------------------------------------------------------------
// Engine projections
// ---------------------------------------------------------------------------

impl From<Filament> for FilamentRecord {
    fn from(row: Filament) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

impl From<FilamentPrice> for FilamentPriceRecord {
    fn from(row: FilamentPrice) -> Self {
        Self {
            id: row.id,
            filament_id: row.filament_id,
            price_per_gram: row.price_per_gram,
            created_at: row.created_at,
        }
    }
}
