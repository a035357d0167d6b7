//! Filament catalog rules.

use crate::error::CoreError;

/// Maximum length of a filament name, in characters.
pub const MAX_FILAMENT_NAME_LEN: usize = 100;

/// A filament name must be non-blank and at most [`MAX_FILAMENT_NAME_LEN`]
/// characters. Names are matched exactly by the estimator, so surrounding
/// whitespace is rejected rather than trimmed.
pub fn validate_filament_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Filament name must not be empty".into()));
    }
    if name.trim() != name {
        return Err(CoreError::Validation(
            "Filament name must not have leading or trailing whitespace".into(),
        ));
    }
    if name.chars().count() > MAX_FILAMENT_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Filament name must be at most {MAX_FILAMENT_NAME_LEN} characters"
        )));
    }
    Ok(())
}
