//! Redirect responses.
//!
//! # Design Decisions
//! - A match is a `302 Found`, the status edge routers use for short links
//! - A target that cannot be a header value is a server-side data error (500)

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Body returned when no redirect matches.
pub const NOT_FOUND_BODY: &str = "404: URL not found";

/// `302 Found` pointing at `target`.
pub fn redirect(target: &str) -> Response {
    match HeaderValue::from_str(target) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(e) => {
            tracing::error!(location = %target, error = %e, "Redirect target is not a valid header value");
            (StatusCode::INTERNAL_SERVER_ERROR, "Invalid redirect target").into_response()
        }
    }
}

/// `404 Not Found`.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}
