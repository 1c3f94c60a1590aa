//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the redirect handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Resolve every request path against the published redirect tree
//! - Observability (metrics, correlation IDs)

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::http::request::{request_id, UuidRequestId};
use crate::http::response;
use crate::lifecycle::shutdown;
use crate::lifecycle::RedirectState;
use crate::observability::metrics::{self, Outcome};
use crate::routing::resolve;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub redirects: Arc<RedirectState>,
}

/// HTTP server answering short paths with redirects.
pub struct RedirectServer {
    router: Router,
}

impl RedirectServer {
    /// Create a new server over shared redirect state.
    pub fn new(redirects: Arc<RedirectState>) -> Self {
        let request_secs = redirects.config().timeouts.request_secs;
        let state = AppState { redirects };
        Self {
            router: Self::build_router(request_secs, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(request_secs: u64, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(redirect_handler))
            .route("/", any(redirect_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
            .layer(TraceLayer::new_for_http())
    }

    /// The configured router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(self, listener: TcpListener, shutdown: broadcast::Receiver<()>) -> io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Redirect server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("Redirect server stopped");
        Ok(())
    }
}

/// Resolve the request path and answer with a redirect or a 404.
async fn redirect_handler(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let start_time = Instant::now();
    let path = uri.path();
    let tree = state.redirects.tree();

    match resolve(path, &tree) {
        Some(resolution) => {
            let outcome = if resolution.extended { Outcome::Extended } else { Outcome::Hit };
            metrics::record_resolution(outcome, start_time);
            tracing::debug!(
                request_id = %request_id(&headers),
                path = %path,
                location = %resolution.target,
                extended = resolution.extended,
                "Redirecting"
            );
            response::redirect(&resolution.target)
        }
        None => {
            metrics::record_resolution(Outcome::Miss, start_time);
            tracing::debug!(request_id = %request_id(&headers), path = %path, "No redirect matched");
            response::not_found()
        }
    }
}
