pub mod estimate_settings;
pub mod estimation;
pub mod filament;
