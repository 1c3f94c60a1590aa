//! Redirect prefix tree library.
//!
//! Builds a tree of short-link records keyed by path segment, flattens it
//! back into a list, and resolves request paths to redirect targets with
//! trailing-segment capture.

pub mod admin;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod records;
pub mod resilience;
pub mod routing;
pub mod tree;

pub use config::schema::AppConfig;
pub use http::RedirectServer;
pub use lifecycle::Shutdown;
pub use records::{validate, RawRecord, Resolver, ValidationError};
pub use routing::{resolve, Resolution};
pub use tree::{build_tree, flatten, RedirectData, RedirectTree};
