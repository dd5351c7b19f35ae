use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// Prometheus registry wrapper — the timing middleware pushes samples,
    /// `GET /metrics` renders the exposition text.
    pub metrics: Arc<metrics::MetricsCollector>,

    /// Failure-simulation toggle flipped atomically on every `/maybe-down`
    /// call, so alternation stays strict even under concurrent requests.
    pub failure: AtomicBool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(metrics::MetricsCollector::new()),
            // Starts false so the first /maybe-down call lands on "down".
            failure: AtomicBool::new(false),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
