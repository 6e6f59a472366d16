//! API Key domain
//!
//! Domain types and the storage trait for the API key lifecycle.

mod entity;
mod repository;
mod validation;

pub use entity::{token_prefix, ApiKey, ApiKeyStatus};
pub use repository::{ApiKeyRepository, CAPACITY_REACHED, KEY_NOT_FOUND};
pub use validation::{validate_api_key_token, ApiKeyValidationError, API_KEY_TOKEN_LENGTH};
