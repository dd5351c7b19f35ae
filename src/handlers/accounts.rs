use axum::{extract::Path, Json};
use serde::Serialize;

/// Every account "exists" and holds the same demo balance.
const DEMO_BALANCE: f64 = 1200.5;

#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: String,
    pub balance: f64,
}

// ─── GET /account/:id ────────────────────────────────────────────

pub async fn get_account(Path(id): Path<String>) -> Json<Account> {
    tracing::info!(route = "/account/:id", account_id = %id, "get_account");
    Json(Account {
        id,
        balance: DEMO_BALANCE,
    })
}
