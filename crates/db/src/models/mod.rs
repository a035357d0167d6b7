pub mod estimate_settings;
pub mod filament;
pub mod model_metadata;
