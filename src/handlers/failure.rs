use axum::{extract::State, http::StatusCode};
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::AppState;

// ─── GET /maybe-down ─────────────────────────────────────────────

/// Flips the process-wide failure toggle and reports the new value: 500
/// "boom" when down, 200 "ok" when up. The first call always lands on
/// "down", then strict alternation.
///
/// `fetch_xor` makes the flip a single atomic exchange, so alternation per
/// call count holds even when requests race.
pub async fn maybe_down(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    let was_down = state.failure.fetch_xor(true, Ordering::Relaxed);
    let down = !was_down;

    if down {
        tracing::error!(route = "/maybe-down", "simulated_failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "boom")
    } else {
        (StatusCode::OK, "ok")
    }
}
