//! Metrics collection and exposition.
//!
//! # Metrics
//! - `redirect_resolutions_total` (counter): resolutions by outcome (hit, extended, miss)
//! - `redirect_resolution_duration_seconds` (histogram): resolution latency
//! - `redirect_builds_total` (counter): completed tree builds
//! - `redirect_tree_records` (gauge): records in the published tree
//! - `redirect_build_errors` (gauge): records rejected by the last build
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op, so tests need no setup

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Outcome label for a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Extended,
    Miss,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Hit => "hit",
            Outcome::Extended => "extended",
            Outcome::Miss => "miss",
        }
    }
}

/// Install the Prometheus exporter with an HTTP listener on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one resolution.
pub fn record_resolution(outcome: Outcome, start: Instant) {
    counter!("redirect_resolutions_total", "outcome" => outcome.as_str()).increment(1);
    histogram!("redirect_resolution_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record a finished tree build.
pub fn record_build(records: usize, errors: usize) {
    counter!("redirect_builds_total").increment(1);
    gauge!("redirect_tree_records").set(records as f64);
    gauge!("redirect_build_errors").set(errors as f64);
}
