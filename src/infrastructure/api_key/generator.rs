//! API Key generation
//!
//! Generates cryptographically secure API keys as lowercase hex.

use rand::rngs::OsRng;
use rand::RngCore;

/// Default number of random bytes per key (32 hex characters)
pub const DEFAULT_KEY_BYTES: usize = 16;

/// Generator for secure API keys
#[derive(Debug, Clone)]
pub struct ApiKeyGenerator {
    /// Number of random bytes to generate
    key_bytes: usize,
}

impl ApiKeyGenerator {
    /// Create a new API key generator
    pub fn new() -> Self {
        Self {
            key_bytes: DEFAULT_KEY_BYTES,
        }
    }

    /// Set the number of random bytes
    pub fn with_key_bytes(mut self, bytes: usize) -> Self {
        self.key_bytes = bytes;
        self
    }

    /// Length in characters of every generated key
    pub fn token_length(&self) -> usize {
        self.key_bytes * 2
    }

    /// Generate a new API key from the operating system's CSPRNG
    pub fn generate(&self) -> String {
        let mut random_bytes = vec![0u8; self.key_bytes];
        OsRng.fill_bytes(&mut random_bytes);

        hex::encode(random_bytes)
    }
}

impl Default for ApiKeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}
