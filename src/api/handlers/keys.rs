//! API key issuance endpoint

use serde::Serialize;
use serde_json::Value;

use crate::api::types::ApiError;
use crate::infrastructure::api_key::ApiKeyService;
use crate::infrastructure::observability::record_api_key_issued;

const ISSUED_MESSAGE: &str =
    "Store this key securely. Send it in the X-API-Key header or the apiKey query parameter.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedKeyResponse {
    pub api_key: String,
    pub message: &'static str,
}

/// `GET /get-api-key`
pub async fn issue_api_key(service: &ApiKeyService) -> Result<Value, ApiError> {
    let key = service.issue().await;
    record_api_key_issued();

    Ok(serde_json::to_value(IssuedKeyResponse {
        api_key: key.token().to_string(),
        message: ISSUED_MESSAGE,
    })?)
}
