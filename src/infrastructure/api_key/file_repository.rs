//! File-backed API key repository implementation
//!
//! The mapping is stored as a single JSON object, `token -> {createdAt}`,
//! rewritten in full on every save.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::api_key::{ApiKeyMap, ApiKeyRepository};
use crate::domain::DomainError;

/// JSON file implementation of ApiKeyRepository
#[derive(Debug, Clone)]
pub struct FileApiKeyRepository {
    path: PathBuf,
}

impl FileApiKeyRepository {
    /// Create a repository backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file written first and renamed over the target
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "api_keys.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ApiKeyRepository for FileApiKeyRepository {
    async fn load(&self) -> Result<Option<ApiKeyMap>, DomainError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "Failed to read key store '{}': {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let keys: ApiKeyMap = serde_json::from_str(&contents).map_err(|e| {
            DomainError::storage(format!(
                "Failed to parse key store '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), keys = keys.len(), "Key store file loaded");
        Ok(Some(keys))
    }

    async fn save(&self, keys: &ApiKeyMap) -> Result<(), DomainError> {
        let json = serde_json::to_vec_pretty(keys)
            .map_err(|e| DomainError::storage(format!("Failed to serialize key store: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::storage(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &json).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to write key store '{}': {}",
                temp_path.display(),
                e
            ))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to replace key store '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), keys = keys.len(), "Key store file written");
        Ok(())
    }
}
