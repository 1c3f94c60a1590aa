//! Build event reporting.
//!
//! # Responsibilities
//! - Receive per-record events from the validator and tree builder
//! - Present failures without the build logic knowing how
//!
//! # Design Decisions
//! - Passed explicitly into the builder and validator (no global logger state)
//! - All methods have no-op defaults so sinks implement only what they need

use std::sync::Mutex;

use crate::records::error::{BuildError, Field};

/// Sink for events raised while validating records and building a tree.
pub trait Reporter: Send + Sync {
    /// A resolver for `field` of record `origin` is about to be invoked.
    fn resolving(&self, _origin: &str, _field: Field) {}

    /// A record was inserted into the tree at `path`.
    fn inserted(&self, _origin: &str, _path: &str) {}

    /// A record was rejected.
    fn rejected(&self, _error: &BuildError) {}

    /// A build finished.
    fn finished(&self, _records: usize, _errors: usize) {}
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Reporter that emits structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn resolving(&self, origin: &str, field: Field) {
        tracing::debug!(origin = %origin, field = %field, "Invoking field resolver");
    }

    fn inserted(&self, origin: &str, path: &str) {
        tracing::debug!(origin = %origin, path = %path, "Redirect loaded");
    }

    fn rejected(&self, error: &BuildError) {
        tracing::warn!(origin = %error.origin(), error = %error, "Redirect rejected");
    }

    fn finished(&self, records: usize, errors: usize) {
        if errors == 0 {
            tracing::info!(records, "Redirect tree built");
        } else {
            tracing::warn!(records, errors, "Redirect tree built with errors");
        }
    }
}

/// Reporter that keeps a log of events, for inspection in tests and tools.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    events: Mutex<Vec<String>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn push(&self, event: String) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Reporter for CollectingReporter {
    fn resolving(&self, origin: &str, field: Field) {
        self.push(format!("resolving {} {}", origin, field));
    }

    fn inserted(&self, origin: &str, path: &str) {
        self.push(format!("inserted {} {}", origin, path));
    }

    fn rejected(&self, error: &BuildError) {
        self.push(format!("rejected {}", error.origin()));
    }

    fn finished(&self, records: usize, errors: usize) {
        self.push(format!("finished {} {}", records, errors));
    }
}
