use axum::{middleware, response::Response, Router};
use tower_http::trace::TraceLayer;

use super::dispatch::{dispatch, MatchedRoute};
use super::middleware::{
    cors_layer, logging_middleware, metrics_middleware, security_headers_middleware,
};
use super::state::AppState;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Create the full router with application state
///
/// Every request outside the metrics endpoint falls through to the route
/// table dispatcher.
pub fn create_router(state: AppState, metrics: Option<PrometheusMetrics>) -> Router {
    let mut router = Router::new().fallback(dispatch).with_state(state);

    if let Some(m) = metrics {
        let scrape_route = MatchedRoute(m.path().to_string());
        router = router.merge(create_metrics_router(m).layer(middleware::map_response(
            move |mut response: Response| {
                let scrape_route = scrape_route.clone();
                async move {
                    response.extensions_mut().insert(scrape_route);
                    response
                }
            },
        )));
    }

    router
        .layer(cors_layer())
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
