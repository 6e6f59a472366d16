//! API Key service
//!
//! Provides the key lifecycle: create, list, regenerate and delete.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::api_key::{
    token_prefix, validate_api_key_token, ApiKey, ApiKeyRepository, KEY_NOT_FOUND,
};
use crate::domain::DomainError;

use super::generator::ApiKeyGenerator;

/// Maximum number of simultaneously stored keys
pub const DEFAULT_CAPACITY: usize = 5;

/// Fresh tokens drawn before giving up on a collision
const MAX_GENERATION_ATTEMPTS: usize = 3;

/// API Key service for managing API keys
#[derive(Debug)]
pub struct ApiKeyService<R>
where
    R: ApiKeyRepository,
{
    repository: Arc<R>,
    generator: ApiKeyGenerator,
    capacity: usize,
}

impl<R: ApiKeyRepository> ApiKeyService<R> {
    /// Create a new API key service
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            generator: ApiKeyGenerator::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Create with a custom generator
    pub fn with_generator(mut self, generator: ApiKeyGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Create with a custom capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Create a new API key
    pub async fn create(&self) -> Result<ApiKey, DomainError> {
        debug!("Creating API key");

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let api_key = ApiKey::new(self.generator.generate());

            match self.repository.insert(api_key, self.capacity).await {
                Ok(created) => {
                    info!(key_prefix = %created.key_prefix(), "API key created");
                    return Ok(created);
                }
                Err(DomainError::Conflict { message }) => {
                    warn!(attempt, "Generated API key collided, retrying: {}", message);
                }
                Err(e @ DomainError::CapacityExceeded { .. }) => {
                    warn!(capacity = self.capacity, "Maximum number of API keys reached");
                    return Err(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(DomainError::conflict("Failed to generate a unique API key"))
    }

    /// List all API keys in creation order
    pub async fn list(&self) -> Result<Vec<ApiKey>, DomainError> {
        debug!("Listing API keys");
        self.repository.list().await
    }

    /// Count stored API keys
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Replace a key's token in place
    pub async fn regenerate(&self, key: &str) -> Result<ApiKey, DomainError> {
        debug!(key_prefix = %token_prefix(key), "Regenerating API key");

        if let Err(e) = validate_api_key_token(key, self.generator.token_length()) {
            debug!("Rejecting malformed API key: {}", e);
            return Err(DomainError::not_found(KEY_NOT_FOUND));
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let new_key = self.generator.generate();

            match self.repository.regenerate(key, &new_key).await {
                Ok(updated) => {
                    info!(
                        old_prefix = %token_prefix(key),
                        new_prefix = %updated.key_prefix(),
                        "API key regenerated"
                    );
                    return Ok(updated);
                }
                Err(DomainError::Conflict { message }) => {
                    warn!(attempt, "Generated API key collided, retrying: {}", message);
                }
                Err(e) => {
                    info!(key_prefix = %token_prefix(key), "API key not regenerated: {}", e);
                    return Err(e);
                }
            }
        }

        Err(DomainError::conflict("Failed to generate a unique API key"))
    }

    /// Delete an API key
    pub async fn delete(&self, key: &str) -> Result<ApiKey, DomainError> {
        debug!(key_prefix = %token_prefix(key), "Deleting API key");

        if let Err(e) = validate_api_key_token(key, self.generator.token_length()) {
            debug!("Rejecting malformed API key: {}", e);
            return Err(DomainError::not_found(KEY_NOT_FOUND));
        }

        match self.repository.remove(key).await {
            Ok(removed) => {
                info!(key_prefix = %removed.key_prefix(), "API key deleted");
                Ok(removed)
            }
            Err(e) => {
                info!(key_prefix = %token_prefix(key), "API key not deleted: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use tokio_test::{assert_err, assert_ok};

    use crate::domain::api_key::ApiKeyStatus;
    use crate::infrastructure::api_key::InMemoryApiKeyRepository;

    fn service() -> ApiKeyService<InMemoryApiKeyRepository> {
        ApiKeyService::new(Arc::new(InMemoryApiKeyRepository::new()))
    }

    #[tokio::test]
    async fn test_create_returns_active_hex_key() {
        let service = service();

        let key = assert_ok!(service.create().await);

        assert_eq!(key.key().len(), 32);
        assert_ok!(validate_api_key_token(key.key(), 32));
        assert_eq!(key.status(), ApiKeyStatus::Active);
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sixth_create_fails_and_leaves_store_unchanged() {
        let service = service();

        for _ in 0..5 {
            assert_ok!(service.create().await);
        }
        let before = service.list().await.unwrap();

        let err = assert_err!(service.create().await);
        assert!(matches!(err, DomainError::CapacityExceeded { .. }));
        assert_eq!(err.message(), "Maximum number of API keys reached.");
        assert_eq!(service.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_create_after_delete_frees_capacity() {
        let service = service();

        for _ in 0..5 {
            service.create().await.unwrap();
        }
        let first = service.list().await.unwrap().remove(0);

        assert_ok!(service.delete(first.key()).await);
        assert_ok!(service.create().await);
        assert_eq!(service.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_custom_capacity() {
        let service = service().with_capacity(2);

        service.create().await.unwrap();
        service.create().await.unwrap();

        assert_err!(service.create().await);
        assert_eq!(service.capacity(), 2);
    }

    #[tokio::test]
    async fn test_created_keys_are_distinct() {
        let service = service();

        for _ in 0..5 {
            service.create().await.unwrap();
        }

        let keys: HashSet<String> = service
            .list()
            .await
            .unwrap()
            .iter()
            .map(|k| k.key().to_string())
            .collect();
        assert_eq!(keys.len(), 5);
    }

    #[tokio::test]
    async fn test_create_gives_up_after_repeated_collisions() {
        // Zero random bytes always yields the empty token
        let service = service().with_generator(ApiKeyGenerator::new().with_key_bytes(0));

        service.create().await.unwrap();
        let err = assert_err!(service.create().await);

        assert!(matches!(err, DomainError::Conflict { .. }));
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_regenerate_in_place() {
        let service = service();
        for _ in 0..3 {
            service.create().await.unwrap();
        }
        let before = service.list().await.unwrap();
        let target = before[1].clone();

        let updated = assert_ok!(service.regenerate(target.key()).await);

        assert_ne!(updated.key(), target.key());
        assert!(updated.created_at() >= target.created_at());
        assert_eq!(updated.status(), ApiKeyStatus::Active);

        let after = service.list().await.unwrap();
        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], updated);
        assert_eq!(after[2], before[2]);
    }

    #[tokio::test]
    async fn test_regenerate_unknown_key() {
        let service = service();
        service.create().await.unwrap();
        let before = service.list().await.unwrap();

        let err = assert_err!(
            service
                .regenerate("0123456789abcdef0123456789abcdef")
                .await
        );

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.message(), "API key not found.");
        assert_eq!(service.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_malformed_key_is_not_found() {
        let service = service();
        service.create().await.unwrap();

        let err = assert_err!(service.regenerate("not-a-key").await);
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = assert_err!(service.delete("nonexistent").await);
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let service = service();
        for _ in 0..3 {
            service.create().await.unwrap();
        }
        let before = service.list().await.unwrap();

        let removed = assert_ok!(service.delete(before[1].key()).await);
        assert_eq!(removed, before[1]);

        let after = service.list().await.unwrap();
        assert_eq!(after, vec![before[0].clone(), before[2].clone()]);
    }

    #[tokio::test]
    async fn test_delete_unknown_key() {
        let service = service();
        service.create().await.unwrap();

        let err = assert_err!(
            service
                .delete("ffffffffffffffffffffffffffffffff")
                .await
        );

        assert_eq!(err.message(), "API key not found.");
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_regenerated_key_is_fresh_hex() {
        let service = service();
        for _ in 0..5 {
            service.create().await.unwrap();
        }
        let before = service.list().await.unwrap();

        let updated = assert_ok!(service.regenerate(before[2].key()).await);

        assert_eq!(updated.key().len(), 32);
        assert_ok!(validate_api_key_token(updated.key(), 32));
        assert!(before.iter().all(|k| k.key() != updated.key()));

        let after = service.list().await.unwrap();
        let others = after
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2)
            .map(|(_, k)| k.key());
        for other in others {
            assert_ne!(other, updated.key());
        }
    }

    #[tokio::test]
    async fn test_longer_keys_can_be_regenerated_and_deleted() {
        let service = service().with_generator(ApiKeyGenerator::new().with_key_bytes(32));

        let created = assert_ok!(service.create().await);
        assert_eq!(created.key().len(), 64);

        let updated = assert_ok!(service.regenerate(created.key()).await);
        assert_eq!(updated.key().len(), 64);
        assert_ne!(updated.key(), created.key());

        assert_ok!(service.delete(updated.key()).await);
        assert_eq!(service.count().await.unwrap(), 0);

        // A default-length token no longer matches this service's keys
        let err = assert_err!(
            service
                .delete("0123456789abcdef0123456789abcdef")
                .await
        );
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_respect_capacity() {
        let service = Arc::new(service());

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.create().await })
            })
            .collect();

        let mut created = Vec::new();
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(key) => created.push(key.key().to_string()),
                Err(DomainError::CapacityExceeded { .. }) => rejected += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(created.len(), 5);
        assert_eq!(rejected, 15);
        assert_eq!(service.count().await.unwrap(), 5);

        let unique: HashSet<String> = created.into_iter().collect();
        assert_eq!(unique.len(), 5);
    }
}
