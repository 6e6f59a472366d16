//! In-memory API key repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::api_key::{
    token_prefix, ApiKey, ApiKeyRepository, CAPACITY_REACHED, KEY_NOT_FOUND,
};
use crate::domain::DomainError;

/// In-memory implementation of ApiKeyRepository
///
/// Keys live in an insertion-ordered vector behind a single lock, so every
/// operation sees and mutates a consistent snapshot.
#[derive(Debug)]
pub struct InMemoryApiKeyRepository {
    keys: Arc<RwLock<Vec<ApiKey>>>,
}

impl InMemoryApiKeyRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self {
            keys: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a repository with initial keys
    pub fn with_keys(keys: Vec<ApiKey>) -> Self {
        Self {
            keys: Arc::new(RwLock::new(keys)),
        }
    }
}

impl Default for InMemoryApiKeyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiKeyRepository for InMemoryApiKeyRepository {
    async fn insert(&self, api_key: ApiKey, capacity: usize) -> Result<ApiKey, DomainError> {
        let mut keys = self.keys.write().await;

        if keys.len() >= capacity {
            return Err(DomainError::capacity_exceeded(CAPACITY_REACHED, capacity));
        }

        if keys.iter().any(|k| k.key() == api_key.key()) {
            return Err(DomainError::conflict(format!(
                "API key '{}...' already exists",
                api_key.key_prefix()
            )));
        }

        keys.push(api_key.clone());
        Ok(api_key)
    }

    async fn list(&self) -> Result<Vec<ApiKey>, DomainError> {
        let keys = self.keys.read().await;
        Ok(keys.clone())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let keys = self.keys.read().await;
        Ok(keys.len())
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        let keys = self.keys.read().await;
        Ok(keys.iter().any(|k| k.key() == key))
    }

    async fn regenerate(&self, key: &str, new_key: &str) -> Result<ApiKey, DomainError> {
        let mut keys = self.keys.write().await;

        let index = keys
            .iter()
            .position(|k| k.key() == key)
            .ok_or_else(|| DomainError::not_found(KEY_NOT_FOUND))?;

        if keys.iter().any(|k| k.key() == new_key) {
            return Err(DomainError::conflict(format!(
                "API key '{}...' already exists",
                token_prefix(new_key)
            )));
        }

        let entry = &mut keys[index];
        entry.regenerate(new_key);
        Ok(entry.clone())
    }

    async fn remove(&self, key: &str) -> Result<ApiKey, DomainError> {
        let mut keys = self.keys.write().await;

        let index = keys
            .iter()
            .position(|k| k.key() == key)
            .ok_or_else(|| DomainError::not_found(KEY_NOT_FOUND))?;

        Ok(keys.remove(index))
    }
}
