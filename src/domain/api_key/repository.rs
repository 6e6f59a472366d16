//! API Key repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::ApiKey;
use crate::domain::DomainError;

/// Message returned when a lookup by token misses
pub const KEY_NOT_FOUND: &str = "API key not found.";

/// Message returned when the store is full
pub const CAPACITY_REACHED: &str = "Maximum number of API keys reached.";

/// Repository trait for API key storage
///
/// Each method is atomic with respect to the others: capacity checks and
/// lookups happen under the same guard as the mutation they protect.
#[async_trait]
pub trait ApiKeyRepository: Send + Sync + Debug {
    /// Append a key, failing if the store already holds `capacity` keys
    /// or the token is already present
    async fn insert(&self, api_key: ApiKey, capacity: usize) -> Result<ApiKey, DomainError>;

    /// List all keys in insertion order
    async fn list(&self) -> Result<Vec<ApiKey>, DomainError>;

    /// Count stored keys
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a token exists
    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.list().await?.iter().any(|k| k.key() == key))
    }

    /// Replace the token of an existing key in place, keeping its position
    async fn regenerate(&self, key: &str, new_key: &str) -> Result<ApiKey, DomainError>;

    /// Remove a key, returning the removed record
    async fn remove(&self, key: &str) -> Result<ApiKey, DomainError>;
}
