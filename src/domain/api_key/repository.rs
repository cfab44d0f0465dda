//! API key persistence trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::ApiKeyMap;
use crate::domain::DomainError;

/// Durable backing for the key mapping
///
/// The whole mapping is loaded once at startup and rewritten in full on every
/// issuance.
#[async_trait]
pub trait ApiKeyRepository: Send + Sync + Debug {
    /// Load the persisted mapping; `Ok(None)` when nothing has been saved yet
    async fn load(&self) -> Result<Option<ApiKeyMap>, DomainError>;

    /// Replace the persisted mapping
    async fn save(&self, keys: &ApiKeyMap) -> Result<(), DomainError>;
}
