//! Length field validation.

use std::num::IntErrorKind;

use crate::error::ValidationError;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 15;

/// Validate user-entered length text.
///
/// Only plain decimal integers are accepted; anything else is treated as a
/// missing value.
pub fn validate_length(text: &str) -> Result<usize, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::Required);
    }

    let value = match text.parse::<i64>() {
        Ok(n) => n,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => ValidationError::TooLarge,
                IntErrorKind::NegOverflow => ValidationError::TooSmall,
                _ => ValidationError::Required,
            });
        }
    };

    if value < MIN_LENGTH as i64 {
        Err(ValidationError::TooSmall)
    } else if value > MAX_LENGTH as i64 {
        Err(ValidationError::TooLarge)
    } else {
        Ok(value as usize)
    }
}
