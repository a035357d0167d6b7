use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Model not found")]
    ModelNotFound { model_id: DbId },

    #[error("Filament not found")]
    FilamentNotFound { name: String },

    #[error("Filament pricing not found")]
    PricingNotFound { filament_id: DbId },

    #[error("Estimate source failure: {0}")]
    Source(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
