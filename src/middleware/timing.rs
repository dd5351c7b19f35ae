use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use crate::AppState;

/// Tower-compatible middleware that wraps every routed request in a timer
/// and records one observation into the `http_request_duration_ms`
/// histogram, labelled (method, route template, status code).
///
/// Using the route template (`/account/:id`) rather than the raw path keeps
/// the label cardinality bounded no matter how many account ids are hit.
pub async fn timing_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let start = Instant::now();
    let response = next.run(req).await;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    state.metrics.observe(
        method.as_str(),
        &route,
        response.status().as_u16(),
        elapsed_ms,
    );

    response
}
