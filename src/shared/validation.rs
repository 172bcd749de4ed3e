use validator::{Validate, ValidationError};

use crate::core::error::AppError;

/// Rejects empty and whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Runs derive-based validation and maps failures to a bad-request error
pub fn validate_entity<T: Validate>(props: &T) -> Result<(), AppError> {
    props
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}
