//! Health check endpoint

use serde::Serialize;
use serde_json::Value;

use super::state::AppState;
use super::types::ApiError;

/// Health response with store sizes
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub exercises: usize,
    pub api_keys: usize,
}

/// Health check status
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

impl HealthStatus {
    /// An empty catalog still serves requests but every query is empty
    pub fn for_catalog_size(exercises: usize) -> Self {
        if exercises == 0 {
            Self::Degraded
        } else {
            Self::Healthy
        }
    }
}

/// `GET /health`
pub async fn health_check(state: &AppState) -> Result<Value, ApiError> {
    let exercises = state.catalog.len();
    let response = HealthResponse {
        status: HealthStatus::for_catalog_size(exercises),
        version: env!("CARGO_PKG_VERSION").to_string(),
        exercises,
        api_keys: state.api_key_service.len().await,
    };

    Ok(serde_json::to_value(response)?)
}
