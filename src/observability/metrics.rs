//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ticket_http_requests_total` (counter): requests by method, status
//! - `ticket_http_request_duration_seconds` (histogram): latency by method
//! - `ticket_bookings_total` (counter): booking attempts by outcome
//! - `ticket_captchas_issued_total` (counter)
//! - `ticket_active_connections` (gauge)
//!
//! Without an installed recorder every call is a no-op, so tests and
//! deployments with metrics disabled pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "ticket_http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("ticket_http_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_booking(outcome: &'static str) {
    counter!("ticket_bookings_total", "outcome" => outcome).increment(1);
}

pub fn record_captcha_issued() {
    counter!("ticket_captchas_issued_total").increment(1);
}

pub fn connection_opened() {
    gauge!("ticket_active_connections").increment(1.0);
}

pub fn connection_closed() {
    gauge!("ticket_active_connections").decrement(1.0);
}

/// Middleware recording count and latency of every request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let response = next.run(request).await;
    record_request(&method, response.status().as_u16(), start);
    response
}
