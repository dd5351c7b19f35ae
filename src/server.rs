use axum::{
    middleware as axum_mw,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::middleware::timing;
use crate::AppState;

/// Builds the full Axum `Router` with all routes and middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ── Liveness ────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // ── Simulated banking endpoints ─────────────────────────
        .route("/account/:id", get(handlers::accounts::get_account))
        .route("/transfer", post(handlers::transfers::post_transfer))
        // ── Failure simulation (alert-pipeline fodder) ──────────
        .route("/maybe-down", get(handlers::failure::maybe_down))
        // ── Metrics exposition ──────────────────────────────────
        .route("/metrics", get(handlers::metrics::serve_metrics))
        // ── Provide shared state to all routes above ────────────
        .with_state(Arc::clone(&state))
        // ── Global middleware (applied bottom-up) ───────────────
        .layer(axum_mw::from_fn_with_state(state, timing::timing_middleware))
        .layer(CorsLayer::permissive())
}
