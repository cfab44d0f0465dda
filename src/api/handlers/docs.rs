//! Self-describing documentation endpoint

use serde::Serialize;
use serde_json::Value;

use crate::api::routes::{Route, RouteTable};
use crate::api::types::ApiError;
use crate::domain::{DEFAULT_LIMIT, DEFAULT_OFFSET};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub authentication: AuthenticationDoc,
    pub pagination: PaginationDoc,
    pub endpoints: Vec<EndpointDoc>,
}

#[derive(Debug, Serialize)]
pub struct AuthenticationDoc {
    pub header: &'static str,
    pub query: &'static str,
    pub obtain: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDoc {
    pub default_limit: usize,
    pub default_offset: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDoc {
    pub method: String,
    pub path: String,
    pub description: &'static str,
    pub auth_required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query_params: Vec<&'static str>,
}

impl From<&Route> for EndpointDoc {
    fn from(route: &Route) -> Self {
        Self {
            method: route.method.to_string(),
            path: route.pattern(),
            description: route.description,
            auth_required: !route.is_public(),
            query_params: route.query_params.to_vec(),
        }
    }
}

/// Build the description of every route in `routes`
pub fn describe(routes: &RouteTable) -> DocsResponse {
    DocsResponse {
        name: "Exercise Catalog API",
        version: env!("CARGO_PKG_VERSION"),
        authentication: AuthenticationDoc {
            header: "X-API-Key",
            query: "apiKey",
            obtain: "/get-api-key",
        },
        pagination: PaginationDoc {
            default_limit: DEFAULT_LIMIT,
            default_offset: DEFAULT_OFFSET,
        },
        endpoints: routes.routes().iter().map(EndpointDoc::from).collect(),
    }
}

/// `GET /docs`
pub fn docs(routes: &RouteTable) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(describe(routes))?)
}
