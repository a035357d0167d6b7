pub mod estimate_settings_repo;
pub mod filament_price_repo;
pub mod filament_repo;
pub mod model_metadata_repo;

pub use estimate_settings_repo::EstimateSettingsRepo;
pub use filament_price_repo::FilamentPriceRepo;
pub use filament_repo::FilamentRepo;
pub use model_metadata_repo::ModelMetadataRepo;
