//! API key token validation utilities

use thiserror::Error;

/// Errors that can occur during API key token validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiKeyValidationError {
    #[error("API key cannot be empty")]
    Empty,

    #[error("API key must be exactly {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("API key contains invalid character: '{0}'. Only lowercase hexadecimal digits are allowed")]
    InvalidCharacter(char),
}

/// Length of a hex-encoded token (16 random bytes)
pub const API_KEY_TOKEN_LENGTH: usize = 32;

/// Validate an API key token
///
/// Rules:
/// - Cannot be empty
/// - Exactly `expected_length` characters (the generator's output length)
/// - Only lowercase hexadecimal digits (`0-9`, `a-f`)
pub fn validate_api_key_token(
    token: &str,
    expected_length: usize,
) -> Result<(), ApiKeyValidationError> {
    if token.is_empty() {
        return Err(ApiKeyValidationError::Empty);
    }

    if token.len() != expected_length {
        return Err(ApiKeyValidationError::InvalidLength {
            expected: expected_length,
            actual: token.len(),
        });
    }

    if let Some(c) = token
        .chars()
        .find(|c| !matches!(c, '0'..='9' | 'a'..='f'))
    {
        return Err(ApiKeyValidationError::InvalidCharacter(c));
    }

    Ok(())
}
