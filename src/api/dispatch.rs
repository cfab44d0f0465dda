//! Request dispatch through the route table
//!
//! A single fallback handler resolves every request against the
//! [`RouteTable`], applies the API key gate to protected routes, decodes the
//! prefix parameter and invokes the endpoint. Every outcome is written as a
//! JSON body.

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::debug;

use super::handlers::{docs, exercises, keys};
use super::health;
use super::middleware::require_api_key;
use super::routes::{Endpoint, Resolution, Route};
use super::state::AppState;
use super::types::{ApiError, QueryParams};
use crate::domain::ExerciseField;

/// Pattern of the route that served a response, for metric labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute(pub String);

/// Fallback handler for every request
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let (route, raw_param) = match state.routes.resolve(&method, uri.path()) {
        Resolution::Matched { route, param } => (route, param),
        Resolution::MethodNotAllowed { route } => {
            let mut response = ApiError::method_not_allowed("Method not allowed").into_response();
            response
                .extensions_mut()
                .insert(MatchedRoute(route.pattern()));
            return response;
        }
        Resolution::NotFound => {
            debug!(path = %uri.path(), "No route matched");
            return ApiError::not_found("Route not found").into_response();
        }
    };

    let mut response = match handle(&state, route, raw_param, &uri, &headers).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => e.into_response(),
    };

    response
        .extensions_mut()
        .insert(MatchedRoute(route.pattern()));
    response
}

async fn handle(
    state: &AppState,
    route: &Route,
    raw_param: Option<&str>,
    uri: &Uri,
    headers: &HeaderMap,
) -> Result<Value, ApiError> {
    let query = QueryParams::from_uri(uri)?;

    if !route.is_public() {
        require_api_key(&state.api_key_service, headers, &query).await?;
    }

    let param = raw_param.map(decode_path_param).transpose()?;
    let param = param.as_deref();
    let catalog = state.catalog.as_ref();

    match route.endpoint {
        Endpoint::ListExercises => exercises::list_exercises(catalog, &query),
        Endpoint::BodyPartList => exercises::list_field_values(catalog, ExerciseField::BodyPart),
        Endpoint::EquipmentList => exercises::list_field_values(catalog, ExerciseField::Equipment),
        Endpoint::TargetList => exercises::list_field_values(catalog, ExerciseField::Target),
        Endpoint::ByBodyPart => {
            exercises::exercises_by_field(catalog, ExerciseField::BodyPart, required(param)?, &query)
        }
        Endpoint::ByEquipment => {
            exercises::exercises_by_field(catalog, ExerciseField::Equipment, required(param)?, &query)
        }
        Endpoint::ByTarget => {
            exercises::exercises_by_field(catalog, ExerciseField::Target, required(param)?, &query)
        }
        Endpoint::ByName => {
            exercises::exercises_by_field(catalog, ExerciseField::Name, required(param)?, &query)
        }
        Endpoint::ById => exercises::exercise_by_id(catalog, required(param)?),
        Endpoint::IssueApiKey => keys::issue_api_key(&state.api_key_service).await,
        Endpoint::Docs => docs::docs(&state.routes),
        Endpoint::Health => health::health_check(state).await,
    }
}

/// URL-decode a prefix remainder
fn decode_path_param(raw: &str) -> Result<String, ApiError> {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ApiError::bad_request("Invalid path parameter encoding"))
}

fn required(param: Option<&str>) -> Result<&str, ApiError> {
    param
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing required path parameter"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ApiErrorKind;

    #[test]
    fn test_decode_path_param() {
        assert_eq!(decode_path_param("3%2F4%20sit-up").unwrap(), "3/4 sit-up");
        assert_eq!(decode_path_param("upper%20arms").unwrap(), "upper arms");
        assert_eq!(decode_path_param("chest").unwrap(), "chest");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode_path_param("%FF%FE").unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Validation);
    }

    #[test]
    fn test_required() {
        assert_eq!(required(Some("chest")).unwrap(), "chest");

        for missing in [None, Some(""), Some("  ")] {
            let err = required(missing).unwrap_err();
            assert_eq!(err.kind, ApiErrorKind::Validation);
            assert_eq!(err.message, "Missing required path parameter");
        }
    }
}
