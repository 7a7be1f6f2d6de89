//! Prometheus metrics for the API server.

use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use scopeguard::ScopeGuard;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "sora_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "sora_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "sora_http_requests_in_flight";

    // Generation metrics
    pub const GENERATIONS_TOTAL: &str = "sora_generations_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", route_label(path).to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record the outcome of a generation request.
pub fn record_generation(outcome: &'static str) {
    counter!(names::GENERATIONS_TOTAL, "outcome" => outcome).increment(1);
}

/// Collapse request paths onto known routes to bound label cardinality.
fn route_label(path: &str) -> &'static str {
    match path {
        "/api/generate" => "/api/generate",
        "/health" => "/health",
        "/healthz" => "/healthz",
        "/ready" => "/ready",
        "/metrics" => "/metrics",
        _ => "unmatched",
    }
}

/// Count a request as in flight until the returned guard is dropped.
fn track_in_flight() -> ScopeGuard<(), impl FnOnce(())> {
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);
    scopeguard::guard((), |_| {
        gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);
    })
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    // Released on completion and when the client goes away mid-request
    let in_flight = track_in_flight();
    let response = next.run(request).await;
    drop(in_flight);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
