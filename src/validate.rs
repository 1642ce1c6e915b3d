//! Identifier validation — runs before any network call.

use crate::error::TrackError;

/// Minimum accepted identifier length, after trimming.
pub const MIN_CEDULA_LEN: usize = 6;

/// Validate a raw user-entered cédula.
///
/// Returns the trimmed identifier on success.
///
/// # Errors
///
/// Returns [`TrackError::EmptyInput`] when the input is blank after trimming
/// and [`TrackError::TooShort`] when it has fewer than [`MIN_CEDULA_LEN`]
/// characters. Neither case reaches the lookup client.
pub fn validate_cedula(raw: &str) -> Result<String, TrackError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TrackError::EmptyInput);
    }
    if trimmed.chars().count() < MIN_CEDULA_LEN {
        return Err(TrackError::TooShort);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
