pub mod accounts;
pub mod failure;
pub mod metrics;
pub mod transfers;

use axum::Json;
use serde_json::{json, Value};

// ─── Liveness handlers ───────────────────────────────────────────

/// GET / — fixed liveness string for humans and load balancers.
pub async fn root() -> &'static str {
    "Banking API is alive"
}

/// GET /health — static ok, independent of the failure toggle.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
