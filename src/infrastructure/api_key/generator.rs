//! API Key generation
//!
//! Generates opaque tokens from cryptographically secure random bytes.

use rand::RngCore;

/// Generator for API key tokens
#[derive(Debug, Clone)]
pub struct ApiKeyGenerator {
    /// Number of random bytes to generate
    key_bytes: usize,
}

impl ApiKeyGenerator {
    /// Create a generator producing 32-byte tokens
    pub fn new() -> Self {
        Self { key_bytes: 32 }
    }

    /// Generate a new hex-encoded token
    pub fn generate(&self) -> String {
        let mut random_bytes = vec![0u8; self.key_bytes];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        hex::encode(random_bytes)
    }
}

impl Default for ApiKeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}
