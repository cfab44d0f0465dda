//! Issue-key command - adds one key to the key store file

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::ApiKey;
use crate::infrastructure::api_key::{ApiKeyService, FileApiKeyRepository};

/// Issue a key into the configured store and print it to stdout
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap();

    let key = issue_into(&config.api_keys.store_path).await?;
    info!(store = %config.api_keys.store_path.display(), "API key written to key store");

    println!("{}", key.token());
    Ok(())
}

/// Unlike the HTTP endpoint, a failed save is an error here
async fn issue_into(store_path: &Path) -> anyhow::Result<ApiKey> {
    let repository = Arc::new(FileApiKeyRepository::new(store_path));
    let service = ApiKeyService::load(repository).await;

    Ok(service.try_issue().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiKeyRepository;

    #[tokio::test]
    async fn test_issue_into_appends_to_existing_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.json");

        let first = issue_into(&path).await.unwrap();
        let second = issue_into(&path).await.unwrap();

        let stored = FileApiKeyRepository::new(&path).load().await.unwrap().unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.contains_key(first.token()));
        assert!(stored.contains_key(second.token()));
    }
}
