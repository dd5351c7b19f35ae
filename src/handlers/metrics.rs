use axum::{extract::State, http::header, response::IntoResponse};
use std::sync::Arc;

use crate::AppState;

// ─── GET /metrics ────────────────────────────────────────────────

/// Serializes the whole registry in Prometheus text exposition format.
pub async fn serve_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, state.metrics.content_type())],
        state.metrics.render(),
    )
}
