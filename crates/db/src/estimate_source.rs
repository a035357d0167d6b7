//! PostgreSQL-backed implementation of the estimation engine's lookups.

use async_trait::async_trait;
use printshop_core::error::CoreError;
use printshop_core::estimation::{
    EstimateSource, FilamentPriceRecord, FilamentRecord, ModelRecord,
};
use printshop_core::pricing::SurchargeRates;
use printshop_core::types::DbId;
use sqlx::PgPool;

use crate::repositories::{
    EstimateSettingsRepo, FilamentPriceRepo, FilamentRepo, ModelMetadataRepo,
};

/// Resolves engine inputs through the repositories.
///
/// Each lookup runs on its own pooled connection; no isolation is held
/// across lookups, so a price change mid-calculation may be observed.
#[derive(Clone)]
pub struct PgEstimateSource {
    pool: PgPool,
}

impl PgEstimateSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn source_error(lookup: &'static str, err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, lookup, "Estimate lookup failed");
    CoreError::Source(format!("{lookup}: {err}"))
}

#[async_trait]
impl EstimateSource for PgEstimateSource {
    async fn find_model_by_id(&self, model_id: DbId) -> Result<Option<ModelRecord>, CoreError> {
        let row = ModelMetadataRepo::find_by_model_id(&self.pool, model_id)
            .await
            .map_err(|e| source_error("model_metadata", e))?;
        Ok(row.map(ModelRecord::from))
    }

    async fn find_filament_by_name(
        &self,
        name: &str,
    ) -> Result<Option<FilamentRecord>, CoreError> {
        let row = FilamentRepo::find_active_by_name(&self.pool, name)
            .await
            .map_err(|e| source_error("filaments", e))?;
        Ok(row.map(FilamentRecord::from))
    }

    async fn find_latest_price_for_filament(
        &self,
        filament_id: DbId,
    ) -> Result<Option<FilamentPriceRecord>, CoreError> {
        let row = FilamentPriceRepo::find_latest_for_filament(&self.pool, filament_id)
            .await
            .map_err(|e| source_error("filament_prices", e))?;
        Ok(row.map(FilamentPriceRecord::from))
    }

    async fn find_estimate_settings(&self) -> Result<Option<SurchargeRates>, CoreError> {
        let row = EstimateSettingsRepo::find(&self.pool)
            .await
            .map_err(|e| source_error("estimate_settings", e))?;
        Ok(row.map(|s| s.rates()))
    }
}
