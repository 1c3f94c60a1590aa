//! Startup and rebuild orchestration.
//!
//! # Responsibilities
//! - Discover records and build the redirect tree
//! - Publish the tree for lock-free reads by request handlers
//! - Rebuild on reload signals until shutdown
//!
//! # Design Decisions
//! - A published tree is never mutated; a rebuild swaps in a new one
//! - Tree and summary are swapped together, so readers never mix builds
//! - Rebuilds are serialized: the last one published read the directory last
//! - A rebuild that cannot read the data directory keeps the current tree
//! - Per-record errors never block publication

use std::io;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use arc_swap::ArcSwap;
use serde::Serialize;
use tokio::sync::{broadcast, mpsc, Mutex};

use crate::config::AppConfig;
use crate::observability::metrics;
use crate::observability::reporter::{Reporter, TracingReporter};
use crate::records::discovery::discover;
use crate::tree::{flatten, BuildOutcome, RedirectTree, TreeBuilder};

/// Summary of the most recent published build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildSummary {
    /// Records in the published tree.
    pub records: usize,
    /// Rejected records, rendered for display.
    pub errors: Vec<String>,
    /// Unix timestamp (seconds) of publication.
    pub built_at: u64,
    /// Wall time spent discovering and building, in milliseconds.
    pub duration_ms: u64,
}

/// A published tree together with the build that produced it.
#[derive(Debug, Default)]
pub struct Published {
    pub tree: Arc<RedirectTree>,
    pub summary: Arc<BuildSummary>,
}

/// Shared service state: the published tree plus what produced it.
pub struct RedirectState {
    config: AppConfig,
    reporter: Arc<dyn Reporter>,
    published: ArcSwap<Published>,
    rebuilding: Mutex<()>,
}

impl RedirectState {
    /// Create state with an empty tree, reporting builds through `tracing`.
    pub fn new(config: AppConfig) -> Self {
        Self::with_reporter(config, Arc::new(TracingReporter))
    }

    pub fn with_reporter(config: AppConfig, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            config,
            reporter,
            published: ArcSwap::from_pointee(Published::default()),
            rebuilding: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consistent snapshot of the published tree and its summary.
    pub fn published(&self) -> Arc<Published> {
        self.published.load_full()
    }

    /// Snapshot of the published tree.
    pub fn tree(&self) -> Arc<RedirectTree> {
        self.published.load().tree.clone()
    }

    /// Summary of the published tree's build.
    pub fn summary(&self) -> Arc<BuildSummary> {
        self.published.load().summary.clone()
    }

    /// Publish a build outcome, replacing the current tree and summary.
    pub fn publish(&self, outcome: BuildOutcome, started: Instant) -> Arc<BuildSummary> {
        let records = flatten(&outcome.tree, |_, _| ()).len();
        let summary = Arc::new(BuildSummary {
            records,
            errors: outcome.errors.iter().map(ToString::to_string).collect(),
            built_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
            duration_ms: started.elapsed().as_millis() as u64,
        });

        self.published.store(Arc::new(Published {
            tree: Arc::new(outcome.tree),
            summary: summary.clone(),
        }));
        metrics::record_build(records, outcome.errors.len());
        summary
    }

    /// Discover, build and publish. On I/O failure the current tree stays.
    ///
    /// Concurrent calls run one at a time, in the order they were made.
    pub async fn rebuild(&self) -> io::Result<Arc<BuildSummary>> {
        let _guard = self.rebuilding.lock().await;
        let started = Instant::now();
        let outcome = build_from_directory(&self.config, self.reporter.as_ref()).await?;
        Ok(self.publish(outcome, started))
    }
}

/// Discover records under `config.data.directory` and build a tree.
///
/// Files that cannot be read or parsed are reported and returned alongside
/// the builder's own errors.
pub async fn build_from_directory(config: &AppConfig, reporter: &dyn Reporter) -> io::Result<BuildOutcome> {
    let data = config.data.clone();
    let discovered = tokio::task::spawn_blocking(move || discover(&data.directory, &data.extensions))
        .await
        .map_err(io::Error::other)??;

    for error in &discovered.errors {
        reporter.rejected(error);
    }

    let mut outcome = TreeBuilder::new(reporter)
        .concurrency(config.build.concurrency)
        .resolver_timeout(config.build.resolver_timeout())
        .build(discovered.records)
        .await;

    let mut errors = discovered.errors;
    errors.append(&mut outcome.errors);
    outcome.errors = errors;
    Ok(outcome)
}

/// Rebuild the tree on every reload signal until shutdown.
pub async fn reload_loop(
    state: Arc<RedirectState>,
    mut reloads: mpsc::UnboundedReceiver<()>,
    mut shutdown: broadcast::Receiver<()>,
) {
    loop {
        tokio::select! {
            signal = reloads.recv() => {
                if signal.is_none() {
                    tracing::debug!("Reload channel closed");
                    break;
                }
                // Coalesce bursts of file events into one rebuild.
                while reloads.try_recv().is_ok() {}

                match state.rebuild().await {
                    Ok(summary) => tracing::info!(
                        records = summary.records,
                        errors = summary.errors.len(),
                        "Redirect tree reloaded"
                    ),
                    Err(e) => tracing::error!(
                        error = %e,
                        "Failed to reload redirect data. Keeping current tree."
                    ),
                }
            }
            _ = shutdown.recv() => {
                tracing::info!("Reload loop received shutdown signal, exiting");
                break;
            }
        }
    }
}
