//! HTTP metrics middleware for recording request/response metrics

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};

use crate::api::dispatch::MatchedRoute;
use crate::infrastructure::observability::record_http_request;

/// Path label for requests that no route served
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Middleware to record HTTP request metrics
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status().as_u16();
    let path = route_label(&response);

    record_http_request(method.as_str(), &path, status, duration);

    response
}

/// Route pattern that served the response
///
/// Unrouted requests share one label so arbitrary paths cannot grow the
/// series count.
fn route_label(response: &Response) -> String {
    response
        .extensions()
        .get::<MatchedRoute>()
        .map(|route| route.0.clone())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}
