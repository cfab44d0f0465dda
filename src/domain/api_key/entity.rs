//! API key entity and its persisted form

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issuance metadata stored alongside each token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyMetadata {
    pub created_at: DateTime<Utc>,
}

impl ApiKeyMetadata {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self { created_at }
    }
}

/// Persisted key mapping, token -> metadata
///
/// Ordered so the backing file is rewritten deterministically.
pub type ApiKeyMap = BTreeMap<String, ApiKeyMetadata>;

/// An issued API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    token: String,
    created_at: DateTime<Utc>,
}

impl ApiKey {
    /// Create a key issued now
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_created_at(token, Utc::now())
    }

    pub fn with_created_at(token: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            created_at,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn metadata(&self) -> ApiKeyMetadata {
        ApiKeyMetadata::new(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_metadata_serializes_camel_case() {
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let json = serde_json::to_string(&ApiKeyMetadata::new(created_at)).unwrap();

        assert_eq!(json, r#"{"createdAt":"2024-05-01T12:00:00Z"}"#);
    }

    #[test]
    fn test_key_map_round_trip() {
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let key = ApiKey::with_created_at("abc123", created_at);

        let mut map = ApiKeyMap::new();
        map.insert(key.token().to_string(), key.metadata());

        let json = serde_json::to_string(&map).unwrap();
        let parsed: ApiKeyMap = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.get("abc123").map(|m| m.created_at), Some(created_at));
    }

    #[test]
    fn test_new_key_is_stamped_now() {
        let before = Utc::now();
        let key = ApiKey::new("token");

        assert!(key.created_at() >= before);
        assert_eq!(key.token(), "token");
    }
}
