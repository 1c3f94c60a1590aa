//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, concurrency > 0)
//! - Check addresses parse before anything binds
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ConfigIssue>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::{AppConfig, PLACEHOLDER_API_KEY};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending setting.
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ConfigIssue>> {
    let mut issues = Vec::new();
    let mut issue = |field: &'static str, message: String| issues.push(ConfigIssue { field, message });

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        issue("listener.bind_address", format!("invalid address '{}': {}", config.listener.bind_address, e));
    }

    if config.data.directory.as_os_str().is_empty() {
        issue("data.directory", "must not be empty".to_string());
    }
    if config.data.extensions.is_empty() {
        issue("data.extensions", "at least one extension is required".to_string());
    }

    if config.build.concurrency == 0 {
        issue("build.concurrency", "must be greater than 0".to_string());
    }

    if config.timeouts.request_secs == 0 {
        issue("timeouts.request_secs", "must be greater than 0".to_string());
    }

    if config.observability.metrics_enabled {
        if let Err(e) = config.observability.metrics_address.parse::<SocketAddr>() {
            issue(
                "observability.metrics_address",
                format!("invalid address '{}': {}", config.observability.metrics_address, e),
            );
        }
    }

    if config.admin.enabled {
        if let Err(e) = config.admin.bind_address.parse::<SocketAddr>() {
            issue("admin.bind_address", format!("invalid address '{}': {}", config.admin.bind_address, e));
        }
        if config.admin.api_key.is_empty() {
            issue("admin.api_key", "must not be empty when admin is enabled".to_string());
        } else if config.admin.api_key == PLACEHOLDER_API_KEY {
            issue("admin.api_key", "must be changed from the placeholder when admin is enabled".to_string());
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
