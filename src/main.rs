use std::sync::Arc;

use banking_demo::{server, AppState};

/// Listen port when `PORT` is unset or unparsable.
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    // ── 1. Structured JSON logging to stdout ─────────────────────
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // ── 2. Build shared state ────────────────────────────────────
    let state = Arc::new(AppState::new());

    // ── 3. Build Axum router ─────────────────────────────────────
    let app = server::create_router(state);

    // ── 4. Bind & serve ──────────────────────────────────────────
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = format!("0.0.0.0:{port}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to port {port}: {e}"));

    tracing::info!(port, "server_started");
    println!("Listening on http://localhost:{port}");
    println!("Metrics → http://localhost:{port}/metrics");

    axum::serve(listener, app)
        .await
        .expect("Server exited with error");
}
