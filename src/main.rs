//! Redirect tree service.
//!
//! Serves short-link redirects from a directory of record files.
//!
//! # Architecture Overview
//!
//! ```text
//!                              ┌─────────────────────────────────────────────────────────┐
//!                              │                    REDIRECT SERVICE                      │
//!                              │                                                          │
//!     Client Request           │  ┌─────────┐    ┌──────────────┐    ┌──────────────┐    │
//!     ─────────────────────────┼─▶│  http   │───▶│   routing    │───▶│  published   │    │
//!                              │  │ server  │    │   resolve    │    │ tree (swap)  │    │
//!                              │  └─────────┘    └──────┬───────┘    └──────▲───────┘    │
//!                              │                        │                   │            │
//!     302 Location / 404       │  ┌─────────┐           │            ┌──────┴───────┐    │
//!     ◀────────────────────────┼──│response │◀──────────┘            │  tree build  │    │
//!                              │  └─────────┘                        │  + validate  │    │
//!                              │                                     └──────▲───────┘    │
//!                              │                                            │            │
//!     Record files ────────────┼─────────────────▶ records::discovery ──────┘            │
//!                              │                                                          │
//!                              │  ┌────────────────────────────────────────────────────┐ │
//!                              │  │              Cross-Cutting Concerns                 │ │
//!                              │  │  ┌─────────┐ ┌────────┐ ┌──────────┐ ┌───────────┐ │ │
//!                              │  │  │ config  │ │ admin  │ │observa-  │ │ lifecycle │ │ │
//!                              │  │  │+watcher │ │  API   │ │ bility   │ │ shutdown  │ │ │
//!                              │  │  └─────────┘ └────────┘ └──────────┘ └───────────┘ │ │
//!                              │  └────────────────────────────────────────────────────┘ │
//!                              └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The config file path is read from `REDIRECT_TREE_CONFIG`; defaults apply
//! when it is unset.

use std::sync::Arc;

use tokio::net::TcpListener;

use redirect_tree::admin;
use redirect_tree::config::loader::load_from_env;
use redirect_tree::config::watcher::DataWatcher;
use redirect_tree::http::{AppState, RedirectServer};
use redirect_tree::lifecycle::signals::shutdown_on_ctrl_c;
use redirect_tree::lifecycle::startup::reload_loop;
use redirect_tree::lifecycle::{RedirectState, Shutdown};
use redirect_tree::observability::logging::init_logging;
use redirect_tree::observability::metrics::init_metrics;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;
    init_logging(&config.observability);

    tracing::info!("redirect-tree v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        data_directory = ?config.data.directory,
        watch = config.data.watch,
        concurrency = config.build.concurrency,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let state = Arc::new(RedirectState::new(config.clone()));
    let summary = state.rebuild().await?;
    tracing::info!(
        records = summary.records,
        errors = summary.errors.len(),
        duration_ms = summary.duration_ms,
        "Redirect tree built"
    );

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown_on_ctrl_c(shutdown.clone()));

    // Dropping the watcher stops change notifications.
    let _watcher = if config.data.watch {
        let (watcher, reloads) = DataWatcher::new(&config.data.directory);
        match watcher.run() {
            Ok(handle) => {
                tokio::spawn(reload_loop(state.clone(), reloads, shutdown.subscribe()));
                Some(handle)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to watch data directory, hot reload disabled");
                None
            }
        }
    } else {
        None
    };

    if config.admin.enabled {
        let admin_listener = TcpListener::bind(&config.admin.bind_address).await?;
        let admin_state = AppState { redirects: state.clone() };
        let admin_shutdown = shutdown.subscribe();
        tokio::spawn(async move {
            if let Err(e) = admin::serve(admin_state, admin_listener, admin_shutdown).await {
                tracing::error!(error = %e, "Admin server failed");
            }
        });
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    RedirectServer::new(state).run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
