//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, path from REDIRECT_TREE_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!
//! On data change:
//!     watcher.rs detects a change under data.directory
//!     → reload signal → lifecycle rebuilds the redirect tree
//!     → atomic swap of Arc<RedirectTree>
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{AdminConfig, AppConfig, BuildConfig, DataConfig, ListenerConfig, ObservabilityConfig};
