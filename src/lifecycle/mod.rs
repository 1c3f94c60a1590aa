//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Discover records → Build tree → Publish → Start listeners
//!
//! Reload (startup.rs):
//!     Data watcher / admin API → reload signal → Rebuild → Atomic swap
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     Ctrl+C → Trigger broadcast → Servers drain → Reload loop exits
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then tree, then listeners
//! - Listeners start last (traffic only when a tree is published)

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{BuildSummary, Published, RedirectState};
