//! API key gate

use axum::http::HeaderMap;
use tracing::debug;

use crate::api::types::{ApiError, QueryParams};
use crate::infrastructure::api_key::ApiKeyService;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Query parameter carrying the API key
pub const API_KEY_QUERY_PARAM: &str = "apiKey";

const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing API key";

/// Require a valid API key from the header or, failing that, the query
pub async fn require_api_key(
    service: &ApiKeyService,
    headers: &HeaderMap,
    query: &QueryParams,
) -> Result<(), ApiError> {
    let Some(token) = extract_api_key(headers, query) else {
        debug!("Request without API key rejected");
        return Err(ApiError::unauthorized(UNAUTHORIZED_MESSAGE));
    };

    debug!(
        key_prefix = %token.chars().take(8).collect::<String>(),
        "Validating API key"
    );

    if service.validate(token).await {
        Ok(())
    } else {
        Err(ApiError::unauthorized(UNAUTHORIZED_MESSAGE))
    }
}

/// The header value wins over the query parameter; blank values count as absent
fn extract_api_key<'a>(headers: &'a HeaderMap, query: &'a QueryParams) -> Option<&'a str> {
    let from_header = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    from_header.or_else(|| {
        query
            .get(API_KEY_QUERY_PARAM)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::api::types::ApiErrorKind;
    use crate::infrastructure::api_key::InMemoryApiKeyRepository;

    fn query(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_extract_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, "abc123".parse().unwrap());

        assert_eq!(extract_api_key(&headers, &QueryParams::default()), Some("abc123"));
    }

    #[test]
    fn test_extract_from_query() {
        let headers = HeaderMap::new();
        let query = query(&[("apiKey", "def456")]);

        assert_eq!(extract_api_key(&headers, &query), Some("def456"));
    }

    #[test]
    fn test_header_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, "from-header".parse().unwrap());
        let query = query(&[("apiKey", "from-query")]);

        assert_eq!(extract_api_key(&headers, &query), Some("from-header"));
    }

    #[test]
    fn test_blank_header_falls_back_to_query() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, "   ".parse().unwrap());
        let query = query(&[("apiKey", "from-query")]);

        assert_eq!(extract_api_key(&headers, &query), Some("from-query"));
    }

    #[test]
    fn test_missing_api_key() {
        assert_eq!(extract_api_key(&HeaderMap::new(), &QueryParams::default()), None);
    }

    #[tokio::test]
    async fn test_require_api_key() {
        let service = ApiKeyService::new(Arc::new(InMemoryApiKeyRepository::new()));
        let key = service.issue().await;

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key.token().parse().unwrap());
        assert!(require_api_key(&service, &headers, &QueryParams::default())
            .await
            .is_ok());

        let err = require_api_key(&service, &HeaderMap::new(), &query(&[("apiKey", "not-a-real-token")]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid or missing API key");

        let err = require_api_key(&service, &HeaderMap::new(), &QueryParams::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
    }
}
