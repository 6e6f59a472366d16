//! Application state for shared services

use std::sync::Arc;

use crate::domain::api_key::ApiKeyRepository;
use crate::domain::{ApiKey, DomainError};
use crate::infrastructure::api_key::ApiKeyService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub api_key_service: Arc<dyn ApiKeyServiceTrait>,
}

impl AppState {
    pub fn new(api_key_service: Arc<dyn ApiKeyServiceTrait>) -> Self {
        Self { api_key_service }
    }
}

/// Trait for API key service operations
#[async_trait::async_trait]
pub trait ApiKeyServiceTrait: Send + Sync {
    async fn create(&self) -> Result<ApiKey, DomainError>;
    async fn list(&self) -> Result<Vec<ApiKey>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
    async fn regenerate(&self, key: &str) -> Result<ApiKey, DomainError>;
    async fn delete(&self, key: &str) -> Result<ApiKey, DomainError>;
    fn capacity(&self) -> usize;
}

#[async_trait::async_trait]
impl<R: ApiKeyRepository + 'static> ApiKeyServiceTrait for ApiKeyService<R> {
    async fn create(&self) -> Result<ApiKey, DomainError> {
        ApiKeyService::create(self).await
    }

    async fn list(&self) -> Result<Vec<ApiKey>, DomainError> {
        ApiKeyService::list(self).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        ApiKeyService::count(self).await
    }

    async fn regenerate(&self, key: &str) -> Result<ApiKey, DomainError> {
        ApiKeyService::regenerate(self, key).await
    }

    async fn delete(&self, key: &str) -> Result<ApiKey, DomainError> {
        ApiKeyService::delete(self, key).await
    }

    fn capacity(&self) -> usize {
        ApiKeyService::capacity(self)
    }
}
