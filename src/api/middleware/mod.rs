//! API middleware components

pub mod auth;
pub mod logging;
pub mod metrics;
pub mod security;

pub use auth::{require_api_key, API_KEY_HEADER, API_KEY_QUERY_PARAM};
pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
pub use security::{cors_layer, security_headers_middleware};
