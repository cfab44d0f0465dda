//! API Key service
//!
//! Holds the issued keys in memory and writes the whole mapping through the
//! repository on every issuance.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

use crate::domain::api_key::{ApiKey, ApiKeyMap, ApiKeyRepository};
use crate::domain::DomainError;

use super::generator::ApiKeyGenerator;

/// API Key service: issuance and presence validation
#[derive(Debug)]
pub struct ApiKeyService {
    repository: Arc<dyn ApiKeyRepository>,
    generator: ApiKeyGenerator,
    keys: RwLock<ApiKeyMap>,
    /// Serializes issuance so file writes never interleave
    writer: Mutex<()>,
}

impl ApiKeyService {
    /// Create an empty service writing through `repository`
    pub fn new(repository: Arc<dyn ApiKeyRepository>) -> Self {
        Self::with_keys(repository, ApiKeyMap::new())
    }

    fn with_keys(repository: Arc<dyn ApiKeyRepository>, keys: ApiKeyMap) -> Self {
        Self {
            repository,
            generator: ApiKeyGenerator::new(),
            keys: RwLock::new(keys),
            writer: Mutex::new(()),
        }
    }

    /// Create a service from whatever the repository holds
    ///
    /// An unreadable or corrupt store degrades to an empty mapping.
    pub async fn load(repository: Arc<dyn ApiKeyRepository>) -> Self {
        let keys = match repository.load().await {
            Ok(Some(keys)) => {
                info!(keys = keys.len(), "API keys loaded");
                keys
            }
            Ok(None) => {
                info!("No persisted API keys found, starting with an empty key store");
                ApiKeyMap::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load API keys, starting with an empty key store");
                ApiKeyMap::new()
            }
        };

        Self::with_keys(repository, keys)
    }

    /// Issue a new key
    ///
    /// A failed save is logged and the key is still returned; it stays valid
    /// for this process but will not survive a restart.
    pub async fn issue(&self) -> ApiKey {
        let (api_key, persisted) = self.issue_and_persist().await;

        if let Err(e) = persisted {
            error!(error = %e, "Failed to persist API key store, issued key will not survive a restart");
        }

        api_key
    }

    /// Issue a new key, reporting a failed save to the caller
    pub async fn try_issue(&self) -> Result<ApiKey, DomainError> {
        let (api_key, persisted) = self.issue_and_persist().await;
        persisted.map(|()| api_key)
    }

    async fn issue_and_persist(&self) -> (ApiKey, Result<(), DomainError>) {
        let _writer = self.writer.lock().await;

        let api_key = ApiKey::new(self.generator.generate());
        let snapshot = {
            let mut keys = self.keys.write().await;
            keys.insert(api_key.token().to_string(), api_key.metadata());
            keys.clone()
        };

        info!(
            key_prefix = %api_key.token().chars().take(8).collect::<String>(),
            total_keys = snapshot.len(),
            "API key issued"
        );

        let persisted = self.repository.save(&snapshot).await;
        (api_key, persisted)
    }

    /// True iff `token` has been issued
    pub async fn validate(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }

        let valid = self.keys.read().await.contains_key(token);
        debug!(valid, "API key validated");
        valid
    }

    /// Number of issued keys
    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
