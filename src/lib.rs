//! Keyring API
//!
//! A small API key management service:
//! - Create, list, regenerate and delete keys over HTTP/JSON
//! - Keys are 16 random bytes from the OS CSPRNG, hex-encoded
//! - A fixed number of keys held in process memory

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::api_key::{ApiKeyService, InMemoryApiKeyRepository};
use tracing::info;

/// Create the application state with default configuration
pub fn create_app_state() -> AppState {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> AppState {
    info!(capacity = config.keys.capacity, "Using in-memory key store");

    let api_key_service = ApiKeyService::new(Arc::new(InMemoryApiKeyRepository::new()))
        .with_capacity(config.keys.capacity);

    AppState::new(Arc::new(api_key_service))
}
