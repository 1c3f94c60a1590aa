//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Builder and validator produce:
//!     → reporter.rs (per-record events: resolving, inserted, rejected)
//!
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging for machine parsing
//! - Build failures flow through an explicit reporter, never global state
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
pub mod reporter;

pub use reporter::{CollectingReporter, NullReporter, Reporter, TracingReporter};
