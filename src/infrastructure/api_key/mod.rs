//! API Key infrastructure implementations
//!
//! This module provides implementations for API key generation,
//! in-memory storage and the lifecycle service.

mod generator;
mod repository;
mod service;

pub use generator::{ApiKeyGenerator, DEFAULT_KEY_BYTES};
pub use repository::InMemoryApiKeyRepository;
pub use service::{ApiKeyService, DEFAULT_CAPACITY};
