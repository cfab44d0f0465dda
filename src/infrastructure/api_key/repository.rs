//! In-memory API key repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::api_key::{ApiKeyMap, ApiKeyRepository};
use crate::domain::DomainError;

/// In-memory implementation of ApiKeyRepository
///
/// Keeps the last saved mapping; nothing survives the process. Can be told to
/// fail so callers' error paths are testable.
#[derive(Debug, Default)]
pub struct InMemoryApiKeyRepository {
    saved: Arc<RwLock<Option<ApiKeyMap>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl InMemoryApiKeyRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether load and save should fail
    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    /// Last mapping handed to `save`
    pub async fn saved(&self) -> Option<ApiKeyMap> {
        self.saved.read().await.clone()
    }

    async fn check_should_fail(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::storage("In-memory repository configured to fail"));
        }
        Ok(())
    }
}

#[async_trait]
impl ApiKeyRepository for InMemoryApiKeyRepository {
    async fn load(&self) -> Result<Option<ApiKeyMap>, DomainError> {
        self.check_should_fail().await?;
        Ok(self.saved.read().await.clone())
    }

    async fn save(&self, keys: &ApiKeyMap) -> Result<(), DomainError> {
        self.check_should_fail().await?;
        *self.saved.write().await = Some(keys.clone());
        Ok(())
    }
}
