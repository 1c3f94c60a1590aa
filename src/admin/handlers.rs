use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::http::server::AppState;
use crate::lifecycle::BuildSummary;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub records: usize,
    pub errors: usize,
    pub built_at: u64,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let summary = state.redirects.summary();
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        records: summary.records,
        errors: summary.errors.len(),
        built_at: summary.built_at,
    })
}

pub async fn get_errors(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.redirects.summary().errors.clone())
}

pub async fn reload(State(state): State<AppState>) -> Result<Json<BuildSummary>, (StatusCode, String)> {
    match state.redirects.rebuild().await {
        Ok(summary) => {
            tracing::info!(records = summary.records, errors = summary.errors.len(), "Reloaded via admin API");
            Ok(Json(BuildSummary::clone(&summary)))
        }
        Err(e) => {
            tracing::error!(error = %e, "Admin reload failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
