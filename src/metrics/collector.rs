use prometheus::{Encoder, HistogramOpts, HistogramVec, Registry, TextEncoder};

// ─── Configuration ───────────────────────────────────────────────

/// Histogram bucket boundaries in milliseconds.  Covers the typical
/// request-latency range for a localhost demo service.
const DURATION_BUCKETS_MS: &[f64] = &[50.0, 100.0, 200.0, 500.0, 1000.0];

// ─── Collector ───────────────────────────────────────────────────

/// Thread-safe metrics engine backed by a private Prometheus registry.
/// The timing middleware calls `observe()`, `GET /metrics` calls `render()`.
pub struct MetricsCollector {
    registry: Registry,
    http_request_duration: HistogramVec,
}

impl MetricsCollector {
    pub fn new() -> Self {
        let registry = Registry::new();

        let http_request_duration = HistogramVec::new(
            HistogramOpts::new("http_request_duration_ms", "Duration of HTTP requests in ms")
                .buckets(DURATION_BUCKETS_MS.to_vec()),
            &["method", "route", "code"],
        )
        .expect("histogram creation");

        registry
            .register(Box::new(http_request_duration.clone()))
            .expect("histogram registration");

        // Process-level gauges (cpu, rss, fds) — Linux only.
        #[cfg(target_os = "linux")]
        registry
            .register(Box::new(
                prometheus::process_collector::ProcessCollector::for_self(),
            ))
            .expect("process collector registration");

        Self {
            registry,
            http_request_duration,
        }
    }

    /// Record one request observation. Called from the timing middleware.
    pub fn observe(&self, method: &str, route: &str, code: u16, elapsed_ms: f64) {
        let code = code.to_string();
        self.http_request_duration
            .with_label_values(&[method, route, code.as_str()])
            .observe(elapsed_ms);
    }

    /// Render the registry in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).unwrap_or(());
        String::from_utf8(buffer).unwrap_or_default()
    }

    /// Content-type of the text exposition format.
    pub fn content_type(&self) -> &'static str {
        prometheus::TEXT_FORMAT
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_after_observe_contains_histogram_and_labels() {
        let mc = MetricsCollector::new();
        mc.observe("GET", "/account/:id", 200, 3.2);

        let output = mc.render();
        assert!(
            output.contains("http_request_duration_ms"),
            "Output must contain histogram name, got: {output:?}"
        );
        assert!(output.contains(r#"method="GET""#));
        assert!(output.contains(r#"route="/account/:id""#));
        assert!(output.contains(r#"code="200""#));
    }

    #[test]
    fn observe_increments_sample_count() {
        let mc = MetricsCollector::new();
        mc.observe("POST", "/transfer", 400, 1.0);
        mc.observe("POST", "/transfer", 400, 2.0);

        let output = mc.render();
        assert!(
            output.contains("http_request_duration_ms_count"),
            "Output must contain the _count series"
        );
        let count_line = output
            .lines()
            .find(|l| l.starts_with("http_request_duration_ms_count") && l.contains("/transfer"))
            .expect("count line for /transfer");
        assert!(count_line.trim_end().ends_with('2'));
    }

    #[test]
    fn distinct_status_codes_get_distinct_series() {
        let mc = MetricsCollector::new();
        mc.observe("POST", "/transfer", 200, 1.0);
        mc.observe("POST", "/transfer", 400, 1.0);

        let output = mc.render();
        assert!(output.contains(r#"code="200""#));
        assert!(output.contains(r#"code="400""#));
    }

    #[test]
    fn content_type_is_text_exposition_format() {
        let mc = MetricsCollector::new();
        assert!(mc.content_type().starts_with("text/plain"));
    }
}
